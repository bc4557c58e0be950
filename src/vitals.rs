//! Vitals model - submitted measurements and the stored reading rows
//!
//! Every measurement field is independently optional. The portal's number
//! inputs use zero as their "not recording this today" sentinel, so a
//! submitted zero is normalized to None before storage - a stored zero
//! would corrupt the trend charts and BMI math downstream.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A vitals submission, before normalization. Always appended as a new
/// row; same-day records are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVital {
    pub record_date: NaiveDateTime,
    pub weight_kg: Option<f64>,
    pub bp_systolic: Option<i64>,
    pub bp_diastolic: Option<i64>,
    pub heart_rate: Option<i64>,
    pub sugar_level: Option<f64>,
}

impl NewVital {
    /// Collapse the zero sentinel: any measurement submitted as exactly
    /// zero (or negative, which the forms cannot produce) becomes None.
    pub fn normalized(self) -> Self {
        Self {
            record_date: self.record_date,
            weight_kg: self.weight_kg.filter(|w| *w > 0.0),
            bp_systolic: self.bp_systolic.filter(|v| *v > 0),
            bp_diastolic: self.bp_diastolic.filter(|v| *v > 0),
            heart_rate: self.heart_rate.filter(|v| *v > 0),
            sugar_level: self.sugar_level.filter(|v| *v > 0.0),
        }
    }
}

/// A stored vitals reading, as returned to the charts: chronological
/// order, one row per submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalReading {
    pub record_date: NaiveDateTime,
    pub weight_kg: Option<f64>,
    pub bp_systolic: Option<i64>,
    pub bp_diastolic: Option<i64>,
    pub heart_rate: Option<i64>,
    pub sugar_level: Option<f64>,
}

impl VitalReading {
    /// Whether this reading carries a weight measurement
    pub fn has_weight(&self) -> bool {
        self.weight_kg.is_some()
    }
}

/// Most recent recorded weight in a chronological history, if any reading
/// has one. Used for BMI and fitness-plan math.
pub fn latest_weight(readings: &[VitalReading]) -> Option<f64> {
    readings.iter().rev().find_map(|r| r.weight_kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, weight: Option<f64>) -> VitalReading {
        VitalReading {
            record_date: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            weight_kg: weight,
            bp_systolic: None,
            bp_diastolic: None,
            heart_rate: None,
            sugar_level: None,
        }
    }

    #[test]
    fn test_normalized_drops_zero_sentinels() {
        let vital = NewVital {
            record_date: at(1, None).record_date,
            weight_kg: Some(0.0),
            bp_systolic: Some(120),
            bp_diastolic: Some(0),
            heart_rate: Some(72),
            sugar_level: Some(0.0),
        }
        .normalized();

        assert_eq!(vital.weight_kg, None);
        assert_eq!(vital.bp_systolic, Some(120));
        assert_eq!(vital.bp_diastolic, None);
        assert_eq!(vital.heart_rate, Some(72));
        assert_eq!(vital.sugar_level, None);
    }

    #[test]
    fn test_normalized_keeps_real_values() {
        let vital = NewVital {
            record_date: at(1, None).record_date,
            weight_kg: Some(71.4),
            bp_systolic: None,
            bp_diastolic: None,
            heart_rate: None,
            sugar_level: Some(98.5),
        }
        .normalized();

        assert_eq!(vital.weight_kg, Some(71.4));
        assert_eq!(vital.sugar_level, Some(98.5));
    }

    #[test]
    fn test_latest_weight_skips_trailing_gaps() {
        let history = vec![at(1, Some(72.0)), at(2, Some(71.5)), at(3, None)];
        assert_eq!(latest_weight(&history), Some(71.5));
        assert_eq!(latest_weight(&[at(1, None)]), None);
        assert_eq!(latest_weight(&[]), None);
    }
}
