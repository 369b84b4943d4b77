//! BMI computation and classification.

use crate::{BmiCategory, Biometrics, Error, Result};

/// Upper bound (exclusive) of the Lean band
pub const LEAN_UPPER: f64 = 18.5;

/// Upper bound (exclusive) of the Healthy band
pub const HEALTHY_UPPER: f64 = 25.0;

/// Maximum accepted age in years
pub const MAX_AGE: u8 = 120;

/// Compute BMI as `weight_kg / (height_cm / 100)^2`
///
/// Returns `Error::InvalidBiometric` when height is zero (or otherwise
/// unusable), rather than producing an infinite or NaN BMI.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::InvalidBiometric(format!(
            "height must be greater than zero, got {} cm",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Map a BMI value to its category
///
/// Bands are closed-open: exactly 18.5 is Healthy and exactly 25 is Fat.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < LEAN_UPPER {
        BmiCategory::Lean
    } else if bmi < HEALTHY_UPPER {
        BmiCategory::Healthy
    } else {
        BmiCategory::Fat
    }
}

impl Biometrics {
    /// Check field ranges (age 0-120, non-negative weight and height)
    pub fn validate(&self) -> Result<()> {
        if self.age > MAX_AGE {
            return Err(Error::InvalidBiometric(format!(
                "age must be at most {}, got {}",
                MAX_AGE, self.age
            )));
        }
        if self.weight_kg.is_nan() || self.weight_kg < 0.0 {
            return Err(Error::InvalidBiometric(format!(
                "weight must be non-negative, got {} kg",
                self.weight_kg
            )));
        }
        if self.height_cm.is_nan() || self.height_cm < 0.0 {
            return Err(Error::InvalidBiometric(format!(
                "height must be non-negative, got {} cm",
                self.height_cm
            )));
        }
        Ok(())
    }

    pub fn bmi(&self) -> Result<f64> {
        compute_bmi(self.weight_kg, self.height_cm)
    }

    /// BMI and its category
    pub fn classify(&self) -> Result<(f64, BmiCategory)> {
        let bmi = self.bmi()?;
        Ok((bmi, classify(bmi)))
    }
}
