//! Session identity - the per-session context the UI passes to the core
//!
//! One value per logged-in session, created from a successful login and
//! exclusively owned by that session. Never module-level state: logout is
//! an explicit teardown that consumes the value.

use crate::doctor::Doctor;
use crate::patient::{Patient, ProfileUpdate};
use serde::{Deserialize, Serialize};

/// Authenticated role carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Doctor,
}

/// A logged-in identity and its profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Session {
    Patient(Patient),
    Doctor(Doctor),
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Patient(_) => Role::Patient,
            Session::Doctor(_) => Role::Doctor,
        }
    }

    /// Greeting/attribution name: patients as "First Last", doctors with
    /// the "Dr." honorific used on prescriptions.
    pub fn display_name(&self) -> String {
        match self {
            Session::Patient(p) => p.full_name(),
            Session::Doctor(d) => d.display_name(),
        }
    }

    pub fn patient(&self) -> Option<&Patient> {
        match self {
            Session::Patient(p) => Some(p),
            Session::Doctor(_) => None,
        }
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match self {
            Session::Patient(_) => None,
            Session::Doctor(d) => Some(d),
        }
    }

    /// Mirror a saved profile edit into the session copy so the sidebar
    /// shows the new values without a re-login. No-op for doctor sessions
    /// or a mismatched id.
    pub fn apply_profile_update(&mut self, update: &ProfileUpdate) {
        if let Session::Patient(p) = self {
            if p.unique_id == update.unique_id {
                p.height_cm = Some(update.height_cm);
                p.dob = Some(update.dob);
                p.gender = Some(update.gender);
                p.diet_pref = Some(update.diet_pref);
                p.location = Some(update.location.clone());
            }
        }
    }

    /// Explicit teardown. Dropping the identity ends the session.
    pub fn logout(self) {}
}
