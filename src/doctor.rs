//! Doctor model - registration input and stored profile
//!
//! Doctors get a surrogate integer id and are immutable after
//! registration; there is no edit flow. Email and phone are unique across
//! doctors (separately from the patient table - the same person could in
//! principle appear in both).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A stored doctor row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Surrogate key, auto-assigned by the store
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

impl Doctor {
    /// Display name used on prescriptions: "Dr. First Last"
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}

/// Registration input for a new doctor. All fields are mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

impl NewDoctor {
    /// Check that all fields are non-blank
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("speciality", &self.speciality),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(field.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewDoctor {
        NewDoctor {
            first_name: "Meera".into(),
            last_name: "Iyer".into(),
            email: "meera@example.com".into(),
            phone: "555-0200".into(),
            speciality: "Cardiology".into(),
        }
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(sample().validate().is_ok());

        let mut missing = sample();
        missing.speciality = " ".into();
        assert!(matches!(missing.validate(), Err(Error::Validation(f)) if f == "speciality"));
    }

    #[test]
    fn test_display_name() {
        let doctor = Doctor {
            doctor_id: 1,
            first_name: "Meera".into(),
            last_name: "Iyer".into(),
            email: "meera@example.com".into(),
            phone: "555-0200".into(),
            speciality: "Cardiology".into(),
        };
        assert_eq!(doctor.display_name(), "Dr. Meera Iyer");
    }
}
