//! Database schema definitions

/// SQL to create the patients table.
/// unique_id is the 8-character registration token, stored uppercase.
pub const CREATE_PATIENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS patients (
    unique_id TEXT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT,
    email TEXT UNIQUE NOT NULL,
    phone TEXT UNIQUE NOT NULL,
    dob TEXT,
    location TEXT,
    height_cm REAL,
    diet_pref TEXT,
    gender TEXT
)
"#;

/// SQL to create the doctors table
pub const CREATE_DOCTORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS doctors (
    doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    phone TEXT UNIQUE NOT NULL,
    speciality TEXT NOT NULL
)
"#;

/// SQL to create the vitals table.
/// Measurement columns are independently nullable; a zero submitted from
/// the forms is stored as NULL, never as zero.
pub const CREATE_VITALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS vitals (
    vital_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id TEXT,
    record_date TEXT NOT NULL,
    weight_kg REAL,
    bp_systolic INTEGER,
    bp_diastolic INTEGER,
    heart_rate INTEGER,
    sugar_level REAL,
    FOREIGN KEY (patient_id) REFERENCES patients(unique_id)
)
"#;

/// SQL to create the prescriptions table.
/// doctor_name is a display string copied at write time, not a reference
/// into the doctors table.
pub const CREATE_PRESCRIPTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS prescriptions (
    rx_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id TEXT,
    doctor_name TEXT,
    visit_date TEXT NOT NULL,
    summary TEXT,
    medicine TEXT NOT NULL,
    frequency TEXT,
    timing TEXT,
    FOREIGN KEY (patient_id) REFERENCES patients(unique_id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_vitals_patient ON vitals(patient_id, record_date)",
    "CREATE INDEX IF NOT EXISTS idx_prescriptions_patient ON prescriptions(patient_id, visit_date)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_PATIENTS_TABLE,
        CREATE_DOCTORS_TABLE,
        CREATE_VITALS_TABLE,
        CREATE_PRESCRIPTIONS_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
