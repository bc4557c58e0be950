//! Patient model - registration input, stored profile and profile updates
//!
//! A patient is keyed by an 8-character opaque token generated at
//! registration. Email and phone are globally unique across patients.
//! After creation only the profile fields (dob, location, height_cm,
//! diet_pref, gender) are mutable.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Gender options offered by the profile form, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Get the display/storage string for this gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    /// All selectable options, in form order
    pub fn all() -> &'static [Gender] {
        &[
            Gender::Male,
            Gender::Female,
            Gender::Other,
            Gender::PreferNotToSay,
        ]
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            "Prefer not to say" => Ok(Gender::PreferNotToSay),
            _ => Err(Error::InvalidValue(format!("unknown gender: {}", s))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dietary preference options offered by the profile form, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    OvoVegetarian,
    Jain,
}

impl DietPreference {
    /// Get the display/storage string for this preference
    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
            DietPreference::OvoVegetarian => "Ovo-Vegetarian",
            DietPreference::Jain => "Jain",
        }
    }

    /// All selectable options, in form order
    pub fn all() -> &'static [DietPreference] {
        &[
            DietPreference::Vegetarian,
            DietPreference::NonVegetarian,
            DietPreference::OvoVegetarian,
            DietPreference::Jain,
        ]
    }
}

impl FromStr for DietPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Vegetarian" => Ok(DietPreference::Vegetarian),
            "Non-Vegetarian" => Ok(DietPreference::NonVegetarian),
            "Ovo-Vegetarian" => Ok(DietPreference::OvoVegetarian),
            "Jain" => Ok(DietPreference::Jain),
            _ => Err(Error::InvalidValue(format!("unknown diet preference: {}", s))),
        }
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored patient row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// 8-character opaque token, primary key, stored uppercase
    pub unique_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Globally unique across patients
    pub email: String,
    /// Globally unique across patients
    pub phone: String,
    pub dob: Option<NaiveDate>,
    pub location: Option<String>,
    pub height_cm: Option<f64>,
    pub diet_pref: Option<DietPreference>,
    pub gender: Option<Gender>,
}

impl Patient {
    /// Display name: "First Last", trimmed when last name is absent
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.trim().is_empty() => {
                format!("{} {}", self.first_name, last.trim())
            }
            _ => self.first_name.clone(),
        }
    }
}

/// Registration input for a new patient. Everything except the last name
/// is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
}

impl NewPatient {
    /// Check that all mandatory fields are non-blank
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(field.to_string()));
            }
        }
        Ok(())
    }
}

/// Profile edit payload: a full overwrite of the mutable patient fields,
/// keyed by unique_id. Not a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub unique_id: String,
    pub height_cm: f64,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub diet_pref: DietPreference,
    pub location: String,
}

/// Generate a fresh patient token: the first 8 characters of a v4 UUID,
/// uppercased. The token space is large enough that concurrent
/// registrations colliding is negligible.
pub fn generate_unique_id() -> String {
    Uuid::new_v4().to_string()[..8].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for g in Gender::all() {
            assert_eq!(g.as_str().parse::<Gender>().unwrap(), *g);
        }
        assert!("Robot".parse::<Gender>().is_err());
    }

    #[test]
    fn test_diet_round_trip() {
        for d in DietPreference::all() {
            assert_eq!(d.as_str().parse::<DietPreference>().unwrap(), *d);
        }
        assert!("Carnivore".parse::<DietPreference>().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_mandatory_fields() {
        let new = NewPatient {
            first_name: "  ".into(),
            last_name: None,
            email: "ana@example.com".into(),
            phone: "555-0100".into(),
        };
        assert!(matches!(new.validate(), Err(Error::Validation(f)) if f == "first_name"));

        let new = NewPatient {
            first_name: "Ana".into(),
            last_name: Some("Reyes".into()),
            email: "".into(),
            phone: "555-0100".into(),
        };
        assert!(matches!(new.validate(), Err(Error::Validation(f)) if f == "email"));
    }

    #[test]
    fn test_validate_allows_missing_last_name() {
        let new = NewPatient {
            first_name: "Ana".into(),
            last_name: None,
            email: "ana@example.com".into(),
            phone: "555-0100".into(),
        };
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_generated_id_shape() {
        let id = generate_unique_id();
        assert_eq!(id.len(), 8);
        assert_eq!(id, id.to_uppercase());
        assert_ne!(id, generate_unique_id());
    }

    #[test]
    fn test_full_name_trims_missing_last() {
        let patient = Patient {
            unique_id: "AB12CD34".into(),
            first_name: "Ana".into(),
            last_name: None,
            email: "ana@example.com".into(),
            phone: "555-0100".into(),
            dob: None,
            location: None,
            height_cm: None,
            diet_pref: None,
            gender: None,
        };
        assert_eq!(patient.full_name(), "Ana");
    }
}
