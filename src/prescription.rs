//! Prescription model - submissions, stored rows and visit grouping
//!
//! A visit with N medicines is stored as N rows sharing patient_id,
//! visit_date, doctor_name and summary. The doctor's name is a display
//! string copied at write time, deliberately not a foreign key: a later
//! change to the doctor's record must not rewrite history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One medicine line on the prescription form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineEntry {
    pub name: String,
    /// Display string, e.g. "Twice a day"
    pub frequency: String,
    /// Display string, e.g. "After Breakfast"
    pub timing: String,
}

impl MedicineEntry {
    /// Entries with a blank name are skipped at save time
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// A full prescription submission: one visit, many medicines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPrescription {
    pub patient_id: String,
    /// Display name recorded at write time, e.g. "Dr. Meera Iyer"
    pub doctor_name: String,
    pub visit_date: NaiveDate,
    /// Diagnosis summary, optional
    pub summary: Option<String>,
    pub medicines: Vec<MedicineEntry>,
}

impl NewPrescription {
    /// The medicines that will actually be saved: blank names dropped,
    /// remaining names trimmed, submission order preserved.
    pub fn non_blank_medicines(&self) -> Vec<MedicineEntry> {
        self.medicines
            .iter()
            .filter(|m| !m.is_blank())
            .map(|m| MedicineEntry {
                name: m.name.trim().to_string(),
                frequency: m.frequency.clone(),
                timing: m.timing.clone(),
            })
            .collect()
    }
}

/// A stored prescription row: one medicine of one visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub visit_date: NaiveDate,
    pub doctor_name: String,
    pub summary: Option<String>,
    pub medicine: String,
    pub frequency: String,
    pub timing: String,
}

/// A reconstructed visit: the per-date grouping the history tab renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub visit_date: NaiveDate,
    pub doctor_name: String,
    pub summary: Option<String>,
    pub medicines: Vec<MedicineEntry>,
}

/// Fold prescription rows (as returned by the store, visit_date
/// descending) into visits. Doctor name and summary are taken from the
/// first row of each group; they are identical within a group by
/// construction.
pub fn group_visits(rows: &[Prescription]) -> Vec<Visit> {
    let mut visits: Vec<Visit> = Vec::new();
    for row in rows {
        match visits.last_mut() {
            Some(visit) if visit.visit_date == row.visit_date => {
                visit.medicines.push(MedicineEntry {
                    name: row.medicine.clone(),
                    frequency: row.frequency.clone(),
                    timing: row.timing.clone(),
                });
            }
            _ => visits.push(Visit {
                visit_date: row.visit_date,
                doctor_name: row.doctor_name.clone(),
                summary: row.summary.clone(),
                medicines: vec![MedicineEntry {
                    name: row.medicine.clone(),
                    frequency: row.frequency.clone(),
                    timing: row.timing.clone(),
                }],
            }),
        }
    }
    visits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn med(name: &str) -> MedicineEntry {
        MedicineEntry {
            name: name.into(),
            frequency: "Once a day".into(),
            timing: "After Breakfast".into(),
        }
    }

    fn row(day: u32, medicine: &str) -> Prescription {
        Prescription {
            visit_date: chrono::NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            doctor_name: "Dr. Meera Iyer".into(),
            summary: Some("Seasonal flu".into()),
            medicine: medicine.into(),
            frequency: "Twice a day".into(),
            timing: "After Lunch".into(),
        }
    }

    #[test]
    fn test_non_blank_medicines_filters_and_trims() {
        let rx = NewPrescription {
            patient_id: "AB12CD34".into(),
            doctor_name: "Dr. Meera Iyer".into(),
            visit_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            summary: None,
            medicines: vec![med("  "), med(" Aspirin "), med(""), med("Metformin")],
        };

        let kept = rx.non_blank_medicines();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "Aspirin");
        assert_eq!(kept[1].name, "Metformin");
    }

    #[test]
    fn test_group_visits_reconstructs_multi_medicine_visits() {
        let rows = vec![row(20, "Aspirin"), row(20, "Metformin"), row(5, "Cetirizine")];

        let visits = group_visits(&rows);
        assert_eq!(visits.len(), 2);
        assert_eq!(visits[0].medicines.len(), 2);
        assert_eq!(visits[0].doctor_name, "Dr. Meera Iyer");
        assert_eq!(visits[0].summary.as_deref(), Some("Seasonal flu"));
        assert_eq!(visits[1].medicines.len(), 1);
        assert_eq!(visits[1].medicines[0].name, "Cetirizine");
    }

    #[test]
    fn test_group_visits_empty() {
        assert!(group_visits(&[]).is_empty());
    }
}
