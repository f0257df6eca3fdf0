pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod flow;
pub mod models;
pub mod routes;
pub mod summary;
pub mod validation;
