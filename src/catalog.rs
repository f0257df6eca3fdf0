//! Static booking catalog: departments, their doctor rosters and the
//! selectable half-hour slots. The doctor list is keyed by department, so a
//! doctor choice is only meaningful relative to the selected department.

pub const DEPARTMENTS: [&str; 8] = [
    "General Medicine",
    "Cardiology",
    "Dermatology",
    "Pediatrics",
    "Orthopedics",
    "Neurology",
    "ENT",
    "Ophthalmology",
];

pub const DOCTORS: [(&str, [&str; 3]); 8] = [
    (
        "General Medicine",
        ["Dr. Sarah Johnson", "Dr. Michael Chen", "Dr. Priya Sharma"],
    ),
    (
        "Cardiology",
        ["Dr. Robert Williams", "Dr. Emily Davis", "Dr. Arjun Mehta"],
    ),
    (
        "Dermatology",
        ["Dr. Lisa Anderson", "Dr. James Wilson", "Dr. Anjali Patel"],
    ),
    (
        "Pediatrics",
        ["Dr. Maria Garcia", "Dr. David Lee", "Dr. Sneha Reddy"],
    ),
    (
        "Orthopedics",
        ["Dr. John Smith", "Dr. Rachel Brown", "Dr. Vikram Singh"],
    ),
    (
        "Neurology",
        ["Dr. Amanda Taylor", "Dr. Christopher Moore", "Dr. Kavya Rao"],
    ),
    (
        "ENT",
        ["Dr. Jennifer White", "Dr. Daniel Harris", "Dr. Ravi Kumar"],
    ),
    (
        "Ophthalmology",
        ["Dr. Patricia Martin", "Dr. Steven Clark", "Dr. Meera Gupta"],
    ),
];

/// Half-hour slots between 09:00 AM and 05:00 PM, with the 12:30 PM-02:00 PM
/// lunch window left out.
pub const TIME_SLOTS: [&str; 14] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM",
    "04:30 PM", "05:00 PM",
];

pub fn is_valid_department(name: &str) -> bool {
    DEPARTMENTS.contains(&name)
}

pub fn is_valid_slot(slot: &str) -> bool {
    TIME_SLOTS.contains(&slot)
}

pub fn doctors_for(department: &str) -> Option<&'static [&'static str; 3]> {
    DOCTORS
        .iter()
        .find(|(dept, _)| *dept == department)
        .map(|(_, roster)| roster)
}

pub fn doctor_in_department(department: &str, doctor: &str) -> bool {
    doctors_for(department).is_some_and(|roster| roster.contains(&doctor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_department_has_a_roster() {
        for dept in DEPARTMENTS {
            let roster = doctors_for(dept).expect("missing roster");
            assert_eq!(roster.len(), 3);
        }
        assert_eq!(DOCTORS.len(), DEPARTMENTS.len());
    }

    #[test]
    fn test_no_duplicate_doctor_within_a_department() {
        for (_, roster) in DOCTORS {
            assert_ne!(roster[0], roster[1]);
            assert_ne!(roster[0], roster[2]);
            assert_ne!(roster[1], roster[2]);
        }
    }

    #[test]
    fn test_doctor_membership_is_per_department() {
        assert!(doctor_in_department("Cardiology", "Dr. Emily Davis"));
        // A real doctor, but from another department.
        assert!(!doctor_in_department("Cardiology", "Dr. Sarah Johnson"));
        assert!(!doctor_in_department("Astrology", "Dr. Sarah Johnson"));
    }

    #[test]
    fn test_slot_set() {
        assert_eq!(TIME_SLOTS.len(), 14);
        assert!(is_valid_slot("09:00 AM"));
        assert!(is_valid_slot("05:00 PM"));
        // lunch window is not bookable
        assert!(!is_valid_slot("12:30 PM"));
        assert!(!is_valid_slot("01:00 PM"));
        assert!(!is_valid_slot("01:30 PM"));
    }
}
