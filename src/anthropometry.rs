//! Pure anthropometric math: BMI, ideal body weight, category brackets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The target BMI used to derive ideal body weight.
///
/// Fixed at the upper edge of the "Normal" bracket; not user-configurable.
pub const TARGET_BMI: f64 = 24.0;

/// Computes Body Mass Index from weight in kilograms and height in centimeters.
///
/// Precondition: `height_cm > 0`. Callers validate before reaching this
/// function; division by zero is not guarded here.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Computes ideal body weight in kilograms from height, at [`TARGET_BMI`].
pub fn ibw(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    TARGET_BMI * (height_m * height_m)
}

/// WHO-style BMI bracket.
///
/// Lower boundaries are inclusive: a BMI of exactly 18.5 is `Normal`,
/// 25.0 is `Overweight`, 30.0 is `Obese`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Maps a BMI value to its bracket.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds to two decimal places (BMI, IBW and target weight in the output contract).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place (daily protein grams in the output contract).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
