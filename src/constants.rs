// ABOUTME: Physiological constants and validation limits for the metrics engine
// ABOUTME: Contains published formula coefficients, activity multipliers, and BMI cut-points
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Physiological constants based on published nutrition and exercise science
//!
//! This module contains the scientifically-established constants used by the
//! metrics calculator. Configuration defaults reference these values; callers
//! never inline them.

/// Mifflin-St Jeor resting energy expenditure coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure in healthy individuals.
/// *American Journal of Clinical Nutrition*, 51(2), 241-247.
/// <https://doi.org/10.1093/ajcn/51.2.241>
pub mod mifflin_st_jeor {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEF: f64 = 10.0;

    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEF: f64 = 6.25;

    /// Age coefficient (kcal per year, negative: BMR declines with age)
    pub const AGE_COEF: f64 = -5.0;

    /// Additive constant for the male formula variant
    pub const MALE_CONSTANT: f64 = 5.0;

    /// Additive constant for the female formula variant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity factor multipliers for TDEE estimation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
/// Exercise Physiology: Nutrition, Energy, and Human Performance
pub mod activity_factors {
    /// Sedentary (little/no exercise): 1.2
    pub const SEDENTARY: f64 = 1.2;

    /// Moderate (exercise 3-5 days/week): 1.55
    pub const MODERATE: f64 = 1.55;

    /// Active (heavy exercise 6-7 days/week): 1.725
    pub const ACTIVE: f64 = 1.725;
}

/// Body Mass Index cut-points
///
/// Reference: WHO Expert Consultation (2004). Appropriate body-mass index
/// and its implications. *The Lancet*, 363, 157-163. The classical WHO
/// bands are used; they are configuration data, not policy baked into the
/// calculator.
pub mod bmi {
    /// Centimeters per meter, for the height unit conversion in the BMI formula
    pub const CM_PER_M: f64 = 100.0;

    /// Lower bound of the healthy band (kg/m²)
    pub const HEALTHY_LOWER_BOUND: f64 = 18.5;

    /// Lower bound of the overweight band (kg/m²)
    pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;

    /// Lower bound of the obese band (kg/m²)
    pub const OBESE_LOWER_BOUND: f64 = 30.0;
}

/// Goal-based daily calorie adjustments
///
/// A 500 kcal/day deficit approximates 0.45 kg of fat loss per week;
/// the same surplus is the conventional lean-gain starting point.
/// Reference: Hall, K.D., et al. (2011). Quantification of the effect of
/// energy imbalance on bodyweight. *The Lancet*, 378, 826-837.
pub mod calorie_goals {
    /// Daily deficit for the weight-loss goal (kcal/day)
    pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

    /// Daily surplus for the muscle-gain goal (kcal/day)
    pub const MUSCLE_GAIN_SURPLUS: f64 = 500.0;
}

/// Hydration defaults
///
/// Reference: EFSA Panel on Dietetic Products (2010). Scientific opinion on
/// dietary reference values for water. *EFSA Journal*, 8(3), 1459.
pub mod hydration {
    /// Default daily water goal (liters)
    pub const DEFAULT_DAILY_GOAL_LITERS: f64 = 2.5;

    /// Upper bound accepted for a configured daily goal (liters)
    pub const MAX_DAILY_GOAL_LITERS: f64 = 10.0;
}

/// Plausibility limits applied when validating configuration
///
/// These bound configured coefficients and multipliers, not subject inputs:
/// the calculator itself rejects only non-positive values so that its
/// monotonicity contract holds over the whole positive domain.
pub mod limits {
    /// Activity multipliers below this would imply less than resting expenditure
    pub const MIN_ACTIVITY_FACTOR: f64 = 1.0;

    /// Activity multipliers above this are outside published tables
    pub const MAX_ACTIVITY_FACTOR: f64 = 2.5;

    /// Largest goal adjustment magnitude accepted by config validation (kcal/day)
    pub const MAX_GOAL_ADJUSTMENT: f64 = 1500.0;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Canonical service name for the Vitals engine
    pub const VITALS_ENGINE: &str = "vitals-engine";
}
