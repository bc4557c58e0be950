//! # MediRepo - Patient/Doctor Health Record Core
//!
//! Data-access layer for a small health-record portal: registration,
//! login, profile editing, vitals logging and prescription entry over a
//! relational SQLite store.
//!
//! MediRepo provides:
//! - A four-table relational schema (patients, doctors, vitals, prescriptions)
//! - A `RecordStore` exposing the query/command operations the UI triggers
//! - Per-session identity objects for logged-in patients and doctors
//! - Pure wellness formulas (BMI, BMR, calorie targets) for the fitness hub
//!
//! The presentation layer (forms, tabs, charts) and auth-token plumbing are
//! external collaborators: they consume these operations and supply the
//! session identity, nothing more.

pub mod config;
pub mod doctor;
pub mod patient;
pub mod prescription;
pub mod session;
pub mod storage;
pub mod vitals;
pub mod wellness;

// Re-exports for convenient access
pub use doctor::{Doctor, NewDoctor};
pub use patient::{DietPreference, Gender, NewPatient, Patient, ProfileUpdate};
pub use prescription::{MedicineEntry, NewPrescription, Prescription, Visit};
pub use session::{Role, Session};
pub use storage::RecordStore;
pub use vitals::{NewVital, VitalReading};

/// Result type alias for MediRepo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for MediRepo operations.
///
/// Every operation failure is surfaced as one of these typed values at the
/// operation boundary; storage-engine errors never leak past `Storage`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mandatory input field was missing or blank
    #[error("missing required field: {0}")]
    Validation(String),

    /// Unique-constraint violation on email or phone. Deliberately does not
    /// say which field collided.
    #[error("an account with this email or phone number already exists")]
    Duplicate,

    /// Login lookup matched zero rows, or more than one ambiguous row
    #[error("invalid credentials")]
    Auth,

    /// Referenced patient does not exist
    #[error("no patient found with id: {0}")]
    NotFound(String),

    /// Well-formed request that would persist zero rows
    #[error("no medicines were entered; prescription not saved")]
    EmptySubmission,

    /// A stored value could not be parsed back into its domain type
    #[error("invalid stored value: {0}")]
    InvalidValue(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
