//! Deterministic body-metric estimates.
//!
//! These are plain arithmetic helpers; they never talk to the model.
//!
//! ```rust
//! use fitbot_types::health::{bmi, BmiCategory};
//!
//! let reading = bmi(70.0, 175.0).unwrap();
//! assert_eq!((reading.value, reading.category), (22.9, BmiCategory::NormalWeight));
//! ```
use std::fmt;

use fitbot_core::error::{FitbotError, Result};

/// WHO body-mass-index categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    /// Rounded to one decimal place.
    pub value: f64,
    pub category: BmiCategory,
}

/// Body-mass index from weight in kilograms and height in centimetres.
///
/// # Errors
///
/// * [`FitbotError::Invalid`] – either input is zero, negative or not a number.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReading> {
    if !(weight_kg > 0.0 && height_cm > 0.0) {
        return Err(FitbotError::Invalid(
            "height and weight must be positive numbers".into(),
        ));
    }

    let height_m = height_cm / 100.0;
    let value = (weight_kg / (height_m * height_m) * 10.0).round_ties_even() / 10.0;

    Ok(BmiReading {
        value,
        category: BmiCategory::from_value(value),
    })
}

/// Activity multipliers applied to the basal metabolic rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Case-insensitive lookup; unrecognised labels fall back to
    /// [`ActivityLevel::Moderate`].
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::default(),
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Total daily energy expenditure in kcal (Mifflin-St Jeor BMR times the
/// activity factor).
///
/// Only `"male"` (any case) selects the male formula; every other value uses
/// the female one.
pub fn estimate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
) -> i64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = if gender.eq_ignore_ascii_case("male") {
        base + 5.0
    } else {
        base - 161.0
    };

    (bmr * ActivityLevel::from_label(activity_level).factor()).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bmi_of_reference_adult_is_normal_weight() {
        let reading = bmi(70.0, 175.0).unwrap();
        assert_eq!(reading.value, 22.9);
        assert_eq!(reading.category.to_string(), "Normal weight");
    }

    #[test]
    fn bmi_category_boundaries() {
        assert_eq!(bmi(50.0, 175.0).unwrap().category, BmiCategory::Underweight);
        assert_eq!(bmi(80.0, 175.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(100.0, 175.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn bmi_rejects_non_positive_input() {
        assert!(matches!(bmi(0.0, 175.0), Err(FitbotError::Invalid(_))));
        assert!(matches!(bmi(70.0, -1.0), Err(FitbotError::Invalid(_))));
        assert!(matches!(bmi(f64::NAN, 175.0), Err(FitbotError::Invalid(_))));
    }

    #[test]
    fn tdee_for_male_uses_male_formula() {
        // BMR = 700 + 1093.75 - 150 + 5 = 1648.75; * 1.55 = 2555.5625
        assert_eq!(estimate_tdee(70.0, 175.0, 30, "Male", "moderate"), 2556);
    }

    #[test]
    fn tdee_for_any_other_gender_uses_female_formula() {
        // BMR = 700 + 1093.75 - 150 - 161 = 1482.75; * 1.2 = 1779.3
        assert_eq!(estimate_tdee(70.0, 175.0, 30, "female", "sedentary"), 1779);
        assert_eq!(
            estimate_tdee(70.0, 175.0, 30, "nonbinary", "sedentary"),
            estimate_tdee(70.0, 175.0, 30, "female", "sedentary")
        );
    }

    #[test]
    fn tdee_unknown_activity_defaults_to_moderate() {
        assert_eq!(ActivityLevel::from_label("couch"), ActivityLevel::Moderate);
        assert_eq!(
            estimate_tdee(70.0, 175.0, 30, "male", "couch"),
            estimate_tdee(70.0, 175.0, 30, "male", "MODERATE")
        );
    }

    #[test]
    fn activity_factors_cover_every_level() {
        assert_eq!(ActivityLevel::from_label("Very_Active").factor(), 1.9);
        assert_eq!(ActivityLevel::from_label("light").factor(), 1.375);
        assert_eq!(ActivityLevel::from_label("active").factor(), 1.725);
    }
}
