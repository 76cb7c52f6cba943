// ABOUTME: BMI classification over the configurable band table
// ABOUTME: Maps a BMI value to the band whose half-open interval contains it
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::vitals_config::{BmiBand, BmiBandsConfig};
use crate::errors::AppError;

/// Classify a BMI value against the configured band table
///
/// Bands cover half-open intervals `[lower_bound, next_lower_bound)`; the
/// last band is unbounded above, so a boundary value lands in the band whose
/// lower bound it equals. The table is validated at config load (ascending,
/// first band at 0), so classification over a loaded config cannot miss.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the BMI is not positive, or if the
/// table does not cover the value (possible only for hand-built tables that
/// bypassed config validation)
pub fn classify_bmi(bmi: f64, config: &BmiBandsConfig) -> Result<&BmiBand, AppError> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(AppError::invalid_input("bmi must be positive"));
    }

    config
        .bands
        .iter()
        .rev()
        .find(|band| bmi >= band.lower_bound)
        .ok_or_else(|| AppError::invalid_input("bmi is below every configured band"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::vitals_config::VitalsConfig;

    #[test]
    fn test_classification_with_default_bands() {
        let config = VitalsConfig::default();

        let band = classify_bmi(22.9, &config.bmi_bands).expect("in range");
        assert_eq!(band.label, "healthy");

        let band = classify_bmi(17.0, &config.bmi_bands).expect("in range");
        assert_eq!(band.label, "underweight");

        let band = classify_bmi(31.4, &config.bmi_bands).expect("in range");
        assert_eq!(band.label, "obese");
    }

    #[test]
    fn test_boundary_values_land_in_upper_band() {
        let config = VitalsConfig::default();

        let band = classify_bmi(18.5, &config.bmi_bands).expect("in range");
        assert_eq!(band.label, "healthy");

        let band = classify_bmi(25.0, &config.bmi_bands).expect("in range");
        assert_eq!(band.label, "overweight");
    }

    #[test]
    fn test_non_positive_bmi_rejected() {
        let config = VitalsConfig::default();
        assert!(classify_bmi(0.0, &config.bmi_bands).is_err());
        assert!(classify_bmi(-4.2, &config.bmi_bands).is_err());
    }
}
