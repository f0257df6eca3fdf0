//! Client-side view model for the three booking screens. The server never
//! filters or searches; the list screen works on the full fetched set and
//! re-fetches after every mutation, so everything here is pure state over
//! records the caller already holds.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Appointment, BookingRequest, Status, StatusCounts};
use crate::validation::{self, FieldErrors};

/* -------------------------
   Screen router
--------------------------*/

/// Current screen, carrying the minimal payload the screen needs. The
/// confirmation screen displays the record the store just returned; it never
/// fetches on its own.
#[derive(Debug, Clone)]
pub enum Screen {
    Booking,
    Confirmation(Appointment),
    List,
}

#[derive(Debug, Clone)]
pub struct ScreenRouter {
    screen: Screen,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self {
            screen: Screen::Booking,
        }
    }
}

impl ScreenRouter {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Booking -> Confirmation, carrying the created record.
    pub fn booking_succeeded(&mut self, record: Appointment) {
        self.screen = Screen::Confirmation(record);
    }

    pub fn view_appointments(&mut self) {
        self.screen = Screen::List;
    }

    /// Returns to a blank booking form from any screen.
    pub fn back_to_booking(&mut self) {
        self.screen = Screen::Booking;
    }
}

/* -------------------------
   Booking form state
--------------------------*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PatientName,
    PatientEmail,
    PatientPhone,
    AppointmentDate,
    AppointmentTime,
    Department,
    DoctorName,
    Symptoms,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::PatientName => "patient_name",
            Field::PatientEmail => "patient_email",
            Field::PatientPhone => "patient_phone",
            Field::AppointmentDate => "appointment_date",
            Field::AppointmentTime => "appointment_time",
            Field::Department => "department",
            Field::DoctorName => "doctor_name",
            Field::Symptoms => "symptoms",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub request: BookingRequest,
    pub errors: FieldErrors,
}

impl BookingForm {
    /// Sets one field and clears its stale error. Selecting a department
    /// resets the doctor, since the roster is keyed by department.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            Field::PatientName => &mut self.request.patient_name,
            Field::PatientEmail => &mut self.request.patient_email,
            Field::PatientPhone => &mut self.request.patient_phone,
            Field::AppointmentDate => &mut self.request.appointment_date,
            Field::AppointmentTime => &mut self.request.appointment_time,
            Field::Department => {
                self.request.doctor_name.clear();
                &mut self.request.department
            }
            Field::DoctorName => &mut self.request.doctor_name,
            Field::Symptoms => &mut self.request.symptoms,
        };
        *slot = value;
        self.errors.remove(field.key());
    }

    /// Runs full validation; the form may only be submitted when this
    /// returns true.
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        self.errors = validation::validate_booking(&self.request, today);
        self.errors.is_empty()
    }
}

/* -------------------------
   List screen state
--------------------------*/

/// Search and status filter apply conjunctively over the fetched set.
/// `None` for the filter means "all".
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub search_term: String,
    pub status_filter: Option<Status>,
    pub selected: Option<Uuid>,
}

impl ListView {
    pub fn matches(&self, apt: &Appointment) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = apt.patient_name.to_lowercase().contains(&needle)
            || apt.doctor_name.to_lowercase().contains(&needle)
            || apt.department.to_lowercase().contains(&needle);
        let matches_filter = self.status_filter.is_none_or(|s| apt.status == s);
        matches_search && matches_filter
    }

    pub fn filtered<'a>(&self, all: &'a [Appointment]) -> Vec<&'a Appointment> {
        all.iter().filter(|apt| self.matches(apt)).collect()
    }

    /// Opens the detail overlay for a card.
    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    /// Backdrop click or explicit close.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// A deleted record must not stay open in the detail overlay.
    pub fn record_deleted(&mut self, id: Uuid) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }
}

/// Aggregate counts over the full fetched set, not the filtered subset.
pub fn status_counts(all: &[Appointment]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: all.len(),
        ..StatusCounts::default()
    };
    for apt in all {
        match apt.status {
            Status::Pending => counts.pending += 1,
            Status::Confirmed => counts.confirmed += 1,
            Status::Completed => counts.completed += 1,
            Status::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(name: &str, doctor: &str, department: &str, status: Status) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient_name: name.into(),
            patient_email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            patient_phone: "5551234567".into(),
            appointment_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            appointment_time: "10:00 AM".into(),
            department: department.into(),
            doctor_name: doctor.into(),
            symptoms: "Follow-up".into(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_router_carries_created_record_to_confirmation() {
        let mut router = ScreenRouter::default();
        assert!(matches!(router.screen(), Screen::Booking));

        let record = sample("Asha Rao", "Dr. Emily Davis", "Cardiology", Status::Pending);
        let id = record.id;
        router.booking_succeeded(record);
        match router.screen() {
            Screen::Confirmation(apt) => assert_eq!(apt.id, id),
            other => panic!("unexpected screen: {other:?}"),
        }

        router.view_appointments();
        assert!(matches!(router.screen(), Screen::List));
        router.back_to_booking();
        assert!(matches!(router.screen(), Screen::Booking));
    }

    #[test]
    fn test_changing_department_clears_doctor() {
        let mut form = BookingForm::default();
        form.set(Field::Department, "Cardiology");
        form.set(Field::DoctorName, "Dr. Emily Davis");
        assert_eq!(form.request.doctor_name, "Dr. Emily Davis");

        form.set(Field::Department, "Neurology");
        assert_eq!(form.request.department, "Neurology");
        assert!(form.request.doctor_name.is_empty());
    }

    #[test]
    fn test_setting_a_field_clears_its_error() {
        let mut form = BookingForm::default();
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert!(!form.validate(today));
        assert!(form.errors.contains_key("patient_name"));

        form.set(Field::PatientName, "Asha Rao");
        assert!(!form.errors.contains_key("patient_name"));
        // other errors stay until their own fields change
        assert!(form.errors.contains_key("patient_email"));
    }

    #[test]
    fn test_search_matches_patient_doctor_or_department() {
        let all = vec![
            sample("Asha Rao", "Dr. Emily Davis", "Cardiology", Status::Pending),
            sample("Ben Ortiz", "Dr. Ravi Kumar", "ENT", Status::Confirmed),
        ];

        let mut view = ListView::default();
        view.search_term = "emily".into();
        assert_eq!(view.filtered(&all).len(), 1);

        view.search_term = "ENT".into();
        let hits = view.filtered(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].patient_name, "Ben Ortiz");

        view.search_term = "asha".into();
        assert_eq!(view.filtered(&all).len(), 1);

        view.search_term = "nobody".into();
        assert!(view.filtered(&all).is_empty());
    }

    #[test]
    fn test_search_and_filter_are_conjunctive() {
        // Search hits only a pending record's doctor; filter demands confirmed.
        let all = vec![
            sample("Asha Rao", "Dr. Emily Davis", "Cardiology", Status::Pending),
            sample("Ben Ortiz", "Dr. Ravi Kumar", "ENT", Status::Confirmed),
        ];

        let mut view = ListView::default();
        view.search_term = "emily".into();
        view.status_filter = Some(Status::Confirmed);
        assert!(view.filtered(&all).is_empty());
    }

    #[test]
    fn test_stats_are_computed_over_the_full_set() {
        let all = vec![
            sample("A", "Dr. Emily Davis", "Cardiology", Status::Pending),
            sample("B", "Dr. Emily Davis", "Cardiology", Status::Pending),
            sample("C", "Dr. Ravi Kumar", "ENT", Status::Confirmed),
            sample("D", "Dr. Ravi Kumar", "ENT", Status::Cancelled),
        ];

        let mut view = ListView::default();
        view.status_filter = Some(Status::Confirmed);
        assert_eq!(view.filtered(&all).len(), 1);

        // counts ignore the active filter
        let counts = status_counts(&all);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.confirmed, 1);
        assert_eq!(counts.completed, 0);
        assert_eq!(counts.cancelled, 1);
    }

    #[test]
    fn test_deleting_the_selected_record_closes_the_detail_view() {
        let apt = sample("Asha Rao", "Dr. Emily Davis", "Cardiology", Status::Pending);
        let other = Uuid::new_v4();

        let mut view = ListView::default();
        view.select(apt.id);
        view.record_deleted(other);
        assert_eq!(view.selected, Some(apt.id));

        view.record_deleted(apt.id);
        assert_eq!(view.selected, None);
    }
}
