//! Plain-text confirmation export. Rendered entirely from the record in
//! hand; no further reads.

use uuid::Uuid;

use crate::models::Appointment;

/// Short booking reference shown to patients: the first 8 hex digits of the
/// appointment id, uppercased.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_uppercase()
}

pub fn download_filename(apt: &Appointment) -> String {
    format!("appointment-{}.txt", short_id(&apt.id).to_lowercase())
}

pub fn render(apt: &Appointment) -> String {
    let long_date = apt.appointment_date.format("%A, %B %-d, %Y");
    format!(
        "\
APPOINTMENT CONFIRMATION
========================

Booking ID: {short}
Status: {status}

PATIENT DETAILS
---------------
Name: {name}
Email: {email}
Phone: {phone}

APPOINTMENT DETAILS
------------------
Date: {date}
Time: {time}
Department: {department}
Doctor: {doctor}

SYMPTOMS/REASON
--------------
{symptoms}

Please arrive 15 minutes before your scheduled time.
Bring a valid ID and any relevant medical records.

Thank you for choosing our healthcare services!
",
        short = short_id(&apt.id),
        status = apt.status.as_str().to_uppercase(),
        name = apt.patient_name,
        email = apt.patient_email,
        phone = apt.patient_phone,
        date = long_date,
        time = apt.appointment_time,
        department = apt.department,
        doctor = apt.doctor_name,
        symptoms = apt.symptoms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use chrono::{NaiveDate, Utc};

    fn sample() -> Appointment {
        Appointment {
            id: Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000000").unwrap(),
            patient_name: "Asha Rao".into(),
            patient_email: "asha.rao@example.com".into(),
            patient_phone: "5551234567".into(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            appointment_time: "09:30 AM".into(),
            department: "Cardiology".into(),
            doctor_name: "Dr. Emily Davis".into(),
            symptoms: "Chest pain when climbing stairs".into(),
            status: Status::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_short_id_is_first_eight_hex_digits() {
        let apt = sample();
        assert_eq!(short_id(&apt.id), "A1B2C3D4");
        assert_eq!(download_filename(&apt), "appointment-a1b2c3d4.txt");
    }

    #[test]
    fn test_render_contains_every_field() {
        let apt = sample();
        let text = render(&apt);
        assert!(text.contains("Booking ID: A1B2C3D4"));
        assert!(text.contains("Status: PENDING"));
        assert!(text.contains("Name: Asha Rao"));
        assert!(text.contains("Email: asha.rao@example.com"));
        assert!(text.contains("Phone: 5551234567"));
        assert!(text.contains("Date: Monday, September 7, 2026"));
        assert!(text.contains("Time: 09:30 AM"));
        assert!(text.contains("Department: Cardiology"));
        assert!(text.contains("Doctor: Dr. Emily Davis"));
        assert!(text.contains("Chest pain when climbing stairs"));
    }
}
