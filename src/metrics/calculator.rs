// ABOUTME: Core physiological calculations - BMR, TDEE, BMI, and calorie targets
// ABOUTME: Pure, stateless functions of the subject profile using published formulas
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Metrics Calculator Module
//!
//! Deterministic energy and body-composition calculations. Every function is
//! a pure, synchronous, side-effect-free mapping from validated inputs to a
//! positive real result; the only failure mode is input validation.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology:
//!   Nutrition, Energy, and Human Performance. Lippincott Williams & Wilkins.
//!
//! No rounding happens here: presentation-layer rounding (nearest integer)
//! is a display concern and lives in the CLI.

use crate::config::vitals_config::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, VitalsConfig,
};
use crate::constants::bmi::CM_PER_M;
use crate::errors::AppError;
use crate::metrics::bmi_bands::classify_bmi;
use crate::metrics::profile::{ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile};
use serde::{Deserialize, Serialize};

/// Complete derived metrics for one subject profile
///
/// Recomputed on every call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,

    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,

    /// Body Mass Index (kg/m²)
    pub bmi: f64,

    /// Label of the BMI classification band the subject falls in
    pub bmi_band: String,

    /// Goal-adjusted daily calorie target (kcal/day)
    pub calorie_target: f64,

    /// Activity level used
    pub activity_level: ActivityLevel,

    /// Health goal used
    pub goal: HealthGoal,

    /// Calculation method used
    pub method: String,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// The result is strictly increasing in weight and height and strictly
/// decreasing in age over the whole positive input domain; no clamping or
/// rounding is applied.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age_years` - Age in years
/// * `sex` - Biological sex selecting the formula variant
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming the violated precondition when
/// weight, height, or age is not positive
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> Result<f64, AppError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("weight_kg must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("height_cm must be positive"));
    }
    if age_years == 0 {
        return Err(AppError::invalid_input("age_years must be positive"));
    }

    // Mifflin-St Jeor formula components
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Moderate: 1.55 (exercise 3-5 days/week)
/// - Active: 1.725 (heavy exercise 6-7 days/week)
///
/// The activity level is a closed enumeration; there is no fallback
/// multiplier for unrecognized levels anywhere in this crate.
///
/// # Arguments
/// * `bmr` - Basal Metabolic Rate (kcal/day)
/// * `activity_level` - Activity level category
/// * `config` - Activity factor configuration
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, AppError> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_input("bmr must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
    };

    Ok(bmr * activity_factor)
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// Classification banding is deliberately not part of this computation; see
/// [`classify_bmi`](crate::metrics::bmi_bands::classify_bmi) for the
/// configurable band table.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming the violated precondition when
/// weight or height is not positive
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, AppError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("weight_kg must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("height_cm must be positive"));
    }

    let height_m = height_cm / CM_PER_M;
    Ok(weight_kg / (height_m * height_m))
}

/// Calculate the goal-adjusted daily calorie target
///
/// Formula: target = TDEE + adjustment(goal), where the adjustment is
/// -deficit for weight loss, 0 for maintenance, and +surplus for muscle gain.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if TDEE is not positive, or if the
/// configured deficit meets or exceeds TDEE (the target must stay positive)
pub fn calculate_calorie_target(
    tdee: f64,
    goal: HealthGoal,
    config: &CalorieGoalConfig,
) -> Result<f64, AppError> {
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(AppError::invalid_input("tdee must be positive"));
    }

    let adjustment = match goal {
        HealthGoal::WeightLoss => -config.weight_loss_deficit,
        HealthGoal::Maintenance => 0.0,
        HealthGoal::MuscleGain => config.muscle_gain_surplus,
    };

    let target = tdee + adjustment;
    if target <= 0.0 {
        return Err(AppError::invalid_input(
            "calorie deficit must be smaller than tdee",
        ));
    }

    Ok(target)
}

/// Calculate the complete derived metrics for one subject profile
///
/// This is the main entry point composing BMR, TDEE, BMI, band
/// classification, and the calorie target.
///
/// # Errors
///
/// Returns an error if any input validation fails or the configured band
/// table does not cover the computed BMI
pub fn calculate_daily_metrics(
    profile: &SubjectProfile,
    config: &VitalsConfig,
) -> Result<DailyMetrics, AppError> {
    // Step 1: BMR from the profile biometrics
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        &config.bmr,
    )?;

    // Step 2: TDEE from BMR and activity level
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;

    // Step 3: BMI and its classification band
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let band = classify_bmi(bmi, &config.bmi_bands)?;

    // Step 4: goal-adjusted calorie target
    let calorie_target = calculate_calorie_target(tdee, profile.goal, &config.calorie_goals)?;

    Ok(DailyMetrics {
        bmr,
        tdee,
        bmi,
        bmi_band: band.label.clone(),
        calorie_target,
        activity_level: profile.activity_level,
        goal: profile.goal,
        method: "Mifflin-St Jeor + Activity Factor".to_owned(),
    })
}
