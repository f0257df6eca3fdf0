use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

/* -------------------------
   Status lifecycle
--------------------------*/

/// Stored as lowercase text in the `appointments` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A user-facing transition button on an appointment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusAction {
    Confirm,
    Complete,
    Cancel,
}

impl StatusAction {
    pub fn target(self) -> Status {
        match self {
            StatusAction::Confirm => Status::Confirmed,
            StatusAction::Complete => Status::Completed,
            StatusAction::Cancel => Status::Cancelled,
        }
    }
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Confirmed,
        Status::Completed,
        Status::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Actions offered for an appointment in this state. Completed and
    /// cancelled are terminal.
    pub fn actions(self) -> &'static [StatusAction] {
        match self {
            Status::Pending => &[StatusAction::Confirm, StatusAction::Cancel],
            Status::Confirmed => &[StatusAction::Complete, StatusAction::Cancel],
            Status::Completed | Status::Cancelled => &[],
        }
    }

    /// Transitions are one-directional; anything not reachable through an
    /// offered action is rejected.
    pub fn can_transition(self, to: Status) -> bool {
        self.actions().iter().any(|a| a.target() == to)
    }
}

/* -------------------------
   API DTOs
--------------------------*/

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    /// YYYY-MM-DD, validated against the booking day before parsing.
    pub appointment_date: String,
    pub appointment_time: String,
    pub department: String,
    pub doctor_name: String,
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub data: OkData,
}

#[derive(Debug, Serialize)]
pub struct OkData {
    pub ok: bool,
}

/// Per-status counts over the full fetched set (never the filtered subset).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/* -------------------------
   DB Row Models
--------------------------*/

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub department: String,
    pub doctor_name: String,
    pub symptoms: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}
