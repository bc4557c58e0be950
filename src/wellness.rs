//! Wellness formulas - pure, stateless collaborators of the fitness hub
//!
//! Nothing here touches the store; the UI feeds in profile fields and the
//! latest weight from the vitals history.

use crate::patient::Gender;
use serde::{Deserialize, Serialize};

/// BMI = weight (kg) / height (m)^2. None for a non-positive height.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Standard BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    HealthyWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::HealthyWeight
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::HealthyWeight => "Healthy Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Basal metabolic rate in kcal/day: revised Harris-Benedict for Male and
/// Female, Mifflin-St Jeor (with the +5 constant) as the neutral
/// alternative for the other options.
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    match gender {
        Gender::Male => 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * age_years),
        Gender::Female => 447.593 + (9.247 * weight_kg) + (3.098 * height_cm) - (4.330 * age_years),
        _ => (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * age_years) + 5.0,
    }
}

/// Suggested daily intake for a ~0.5 kg/week loss: sedentary TDEE
/// (BMR x 1.2) minus a 500 kcal deficit.
pub fn daily_calorie_target(bmr: f64) -> f64 {
    bmr * 1.2 - 500.0
}
