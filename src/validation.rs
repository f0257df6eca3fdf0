//! Booking-form validation. Failures are field-scoped so the caller can
//! render each message next to the offending input; an invalid form never
//! reaches the store.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::catalog;
use crate::models::BookingRequest;

pub type FieldErrors = BTreeMap<&'static str, String>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns an empty map iff the request may be submitted. `today` is the day
/// of booking; earlier appointment dates are rejected.
pub fn validate_booking(req: &BookingRequest, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if req.patient_name.trim().is_empty() {
        errors.insert("patient_name", "Name is required".into());
    }

    if req.patient_email.trim().is_empty() {
        errors.insert("patient_email", "Email is required".into());
    } else if !EMAIL_RE.is_match(&req.patient_email) {
        errors.insert("patient_email", "Invalid email format".into());
    }

    if req.patient_phone.trim().is_empty() {
        errors.insert("patient_phone", "Phone is required".into());
    } else if digits_only(&req.patient_phone).len() != 10 {
        errors.insert("patient_phone", "Phone must be 10 digits".into());
    }

    if req.appointment_date.trim().is_empty() {
        errors.insert("appointment_date", "Date is required".into());
    } else {
        match parse_date(&req.appointment_date) {
            None => {
                errors.insert("appointment_date", "Date must be YYYY-MM-DD".into());
            }
            Some(date) if date < today => {
                errors.insert("appointment_date", "Date cannot be in the past".into());
            }
            Some(_) => {}
        }
    }

    if req.appointment_time.trim().is_empty() {
        errors.insert("appointment_time", "Time is required".into());
    } else if !catalog::is_valid_slot(&req.appointment_time) {
        errors.insert("appointment_time", "Unknown time slot".into());
    }

    if req.department.trim().is_empty() {
        errors.insert("department", "Department is required".into());
    } else if !catalog::is_valid_department(&req.department) {
        errors.insert("department", "Unknown department".into());
    }

    if req.doctor_name.trim().is_empty() {
        errors.insert("doctor_name", "Doctor is required".into());
    } else if catalog::is_valid_department(&req.department)
        && !catalog::doctor_in_department(&req.department, &req.doctor_name)
    {
        errors.insert(
            "doctor_name",
            "Doctor does not belong to the selected department".into(),
        );
    }

    if req.symptoms.trim().is_empty() {
        errors.insert("symptoms", "Symptoms are required".into());
    }

    errors
}
