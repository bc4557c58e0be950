//! SQLite record store implementation

use super::schema;
use crate::doctor::{Doctor, NewDoctor};
use crate::patient::{self, DietPreference, Gender, NewPatient, Patient, ProfileUpdate};
use crate::prescription::{NewPrescription, Prescription};
use crate::vitals::{NewVital, VitalReading};
use crate::{Error, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// SQLite-backed store for the health-record tables.
///
/// Each operation is a short, synchronous, atomic unit of work; duplicate
/// registrations racing on the same email/phone are arbitrated by the
/// UNIQUE constraints, never by an application-level check-then-insert.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema. Idempotent; safe on every start.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Patient Operations ==========

    /// Register a new patient and return the generated unique id.
    ///
    /// Fails with `Validation` when a mandatory field is blank and with
    /// `Duplicate` when the email or phone is already taken (without
    /// saying which).
    pub fn register_patient(&self, new: &NewPatient) -> Result<String> {
        new.validate()?;

        let unique_id = patient::generate_unique_id();
        self.conn
            .execute(
                r#"
                INSERT INTO patients (unique_id, first_name, last_name, email, phone)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![unique_id, new.first_name, new.last_name, new.email, new.phone],
            )
            .map_err(map_constraint_violation)?;

        tracing::debug!("registered patient {}", unique_id);
        Ok(unique_id)
    }

    /// Log a patient in by case-insensitive first name and unique id.
    ///
    /// Exactly one row must match; zero or several matches collapse to a
    /// single generic `Auth` failure.
    pub fn login_patient(&self, first_name: &str, unique_id: &str) -> Result<Patient> {
        let mut stmt = self.conn.prepare(
            "SELECT unique_id, first_name, last_name, email, phone, dob, location, height_cm, diet_pref, gender
             FROM patients WHERE lower(first_name) = lower(?1) AND upper(unique_id) = upper(?2)",
        )?;

        let mut matches: Vec<Patient> = stmt
            .query_map(params![first_name.trim(), unique_id.trim()], |row| {
                self.row_to_patient(row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(map_row_err)?;

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(Error::Auth),
            n => {
                tracing::warn!("ambiguous patient login: {} rows matched", n);
                Err(Error::Auth)
            }
        }
    }

    /// Overwrite the mutable profile fields of a patient.
    ///
    /// Full overwrite keyed by unique id, not a partial patch; applying
    /// the same update twice leaves the same stored state.
    pub fn update_patient_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.conn.execute(
            "UPDATE patients SET height_cm = ?1, dob = ?2, gender = ?3, diet_pref = ?4, location = ?5
             WHERE unique_id = ?6",
            params![
                update.height_cm,
                update.dob,
                update.gender.as_str(),
                update.diet_pref.as_str(),
                update.location,
                update.unique_id,
            ],
        )?;
        Ok(())
    }

    /// Count all patients
    pub fn count_patients(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Patient
    fn row_to_patient(&self, row: &rusqlite::Row) -> rusqlite::Result<Patient> {
        let diet_str: Option<String> = row.get(8)?;
        let gender_str: Option<String> = row.get(9)?;

        let diet_pref = diet_str
            .map(|s| s.parse::<DietPreference>())
            .transpose()
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
            })?;

        let gender = gender_str
            .map(|s| s.parse::<Gender>())
            .transpose()
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(9, rusqlite::types::Type::Text, Box::new(e))
            })?;

        Ok(Patient {
            unique_id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
            dob: row.get(5)?,
            location: row.get(6)?,
            height_cm: row.get(7)?,
            diet_pref,
            gender,
        })
    }

    // ========== Doctor Operations ==========

    /// Register a new doctor. `Duplicate` on an email/phone collision.
    pub fn register_doctor(&self, new: &NewDoctor) -> Result<()> {
        new.validate()?;

        self.conn
            .execute(
                r#"
                INSERT INTO doctors (first_name, last_name, email, phone, speciality)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![new.first_name, new.last_name, new.email, new.phone, new.speciality],
            )
            .map_err(map_constraint_violation)?;

        tracing::debug!("registered doctor {} {}", new.first_name, new.last_name);
        Ok(())
    }

    /// Log a doctor in by case-insensitive names and exact phone.
    pub fn login_doctor(&self, first_name: &str, last_name: &str, phone: &str) -> Result<Doctor> {
        let mut stmt = self.conn.prepare(
            "SELECT doctor_id, first_name, last_name, email, phone, speciality
             FROM doctors WHERE lower(first_name) = lower(?1) AND lower(last_name) = lower(?2) AND phone = ?3",
        )?;

        let mut matches: Vec<Doctor> = stmt
            .query_map(
                params![first_name.trim(), last_name.trim(), phone.trim()],
                |row| {
                    Ok(Doctor {
                        doctor_id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        email: row.get(3)?,
                        phone: row.get(4)?,
                        speciality: row.get(5)?,
                    })
                },
            )?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(map_row_err)?;

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(Error::Auth),
            n => {
                tracing::warn!("ambiguous doctor login: {} rows matched", n);
                Err(Error::Auth)
            }
        }
    }

    /// Count all doctors
    pub fn count_doctors(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Vitals Operations ==========

    /// Append a vitals reading for a patient.
    ///
    /// Zero-valued measurements (the forms' "unset" sentinel) are stored
    /// as NULL. Always inserts a new row; same-day records never merge.
    pub fn record_vital(&self, patient_id: &str, vital: NewVital) -> Result<()> {
        let vital = vital.normalized();
        self.conn.execute(
            r#"
            INSERT INTO vitals (patient_id, record_date, weight_kg, bp_systolic, bp_diastolic, heart_rate, sugar_level)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                patient_id,
                vital.record_date,
                vital.weight_kg,
                vital.bp_systolic,
                vital.bp_diastolic,
                vital.heart_rate,
                vital.sugar_level,
            ],
        )?;
        Ok(())
    }

    /// All vitals for a patient in chronological (trend) order. A patient
    /// with no history gets an empty Vec, not an error.
    pub fn vitals_for_patient(&self, patient_id: &str) -> Result<Vec<VitalReading>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_date, weight_kg, bp_systolic, bp_diastolic, heart_rate, sugar_level
             FROM vitals WHERE patient_id = ?1 ORDER BY record_date ASC",
        )?;

        let readings = stmt
            .query_map([patient_id], |row| {
                Ok(VitalReading {
                    record_date: row.get(0)?,
                    weight_kg: row.get(1)?,
                    bp_systolic: row.get(2)?,
                    bp_diastolic: row.get(3)?,
                    heart_rate: row.get(4)?,
                    sugar_level: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(map_row_err)?;

        Ok(readings)
    }

    /// Count all vitals rows
    pub fn count_vitals(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vitals", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Prescription Operations ==========

    /// Save a prescription: one row per non-blank medicine, written in a
    /// single transaction. Returns the number of rows saved.
    ///
    /// Fails with `NotFound` when the patient id does not exist and with
    /// `EmptySubmission` when every medicine name is blank - in both
    /// cases nothing is written, so no phantom visits appear.
    pub fn record_prescription(&mut self, rx: &NewPrescription) -> Result<usize> {
        // patient existence is checked before anything else, even when the
        // submission would save nothing
        let patient_key = rx.patient_id.trim().to_uppercase();
        let exists: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM patients WHERE upper(unique_id) = ?1",
                [&patient_key],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(Error::NotFound(rx.patient_id.trim().to_string()));
        }

        let medicines = rx.non_blank_medicines();
        if medicines.is_empty() {
            return Err(Error::EmptySubmission);
        }

        let tx = self.conn.transaction()?;
        for med in &medicines {
            tx.execute(
                r#"
                INSERT INTO prescriptions (patient_id, doctor_name, visit_date, summary, medicine, frequency, timing)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    patient_key,
                    rx.doctor_name,
                    rx.visit_date,
                    rx.summary,
                    med.name,
                    med.frequency,
                    med.timing,
                ],
            )?;
        }
        tx.commit()?;

        tracing::debug!("saved prescription with {} medicines for {}", medicines.len(), patient_key);
        Ok(medicines.len())
    }

    /// All prescription rows for a patient, most recent visit first.
    /// Rows within a visit keep submission order; callers group by
    /// visit_date to reconstruct multi-medicine visits.
    pub fn prescriptions_for_patient(&self, patient_id: &str) -> Result<Vec<Prescription>> {
        let mut stmt = self.conn.prepare(
            "SELECT visit_date, doctor_name, summary, medicine, frequency, timing
             FROM prescriptions WHERE patient_id = ?1 ORDER BY visit_date DESC, rx_id ASC",
        )?;

        let rows = stmt
            .query_map([patient_id], |row| {
                Ok(Prescription {
                    visit_date: row.get(0)?,
                    doctor_name: row.get(1)?,
                    summary: row.get(2)?,
                    medicine: row.get(3)?,
                    frequency: row.get(4)?,
                    timing: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(map_row_err)?;

        Ok(rows)
    }

    /// Count all prescription rows
    pub fn count_prescriptions(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM prescriptions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            patients: self.count_patients()?,
            doctors: self.count_doctors()?,
            vitals: self.count_vitals()?,
            prescriptions: self.count_prescriptions()?,
        })
    }
}

/// Map a row-mapping failure to a typed error: a value that failed to
/// convert back into its domain type becomes `InvalidValue`, anything
/// else passes through as a storage error.
fn map_row_err(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, boxed) => {
            match boxed.downcast::<Error>() {
                Ok(inner) => *inner,
                Err(other) => Error::InvalidValue(other.to_string()),
            }
        }
        other => Error::Storage(other),
    }
}

/// Map a unique-constraint violation during registration to `Duplicate`;
/// everything else passes through as a storage error.
fn map_constraint_violation(err: rusqlite::Error) -> Error {
    if err.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation) {
        Error::Duplicate
    } else {
        Error::Storage(err)
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub patients: usize,
    pub doctors: usize,
    pub vitals: usize,
    pub prescriptions: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Record Store Statistics:")?;
        writeln!(f, "  Patients: {}", self.patients)?;
        writeln!(f, "  Doctors: {}", self.doctors)?;
        writeln!(f, "  Vitals: {}", self.vitals)?;
        writeln!(f, "  Prescriptions: {}", self.prescriptions)
    }
}
