//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - patients(unique_id, first_name, last_name, email, phone, dob, location, height_cm, diet_pref, gender)
//! - doctors(doctor_id, first_name, last_name, email, phone, speciality)
//! - vitals(vital_id, patient_id, record_date, weight_kg, bp_systolic, bp_diastolic, heart_rate, sugar_level)
//! - prescriptions(rx_id, patient_id, doctor_name, visit_date, summary, medicine, frequency, timing)

pub mod schema;
pub mod sqlite;

pub use sqlite::{RecordStore, StoreStats};
