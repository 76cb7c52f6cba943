// ABOUTME: Comprehensive algorithm tests for the physiological metrics calculator
// ABOUTME: Tests BMR, TDEE, BMI, calorie targets, and the composed daily report
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//! Comprehensive algorithm tests for the metrics module
//!
//! This test suite covers the calculation core:
//! - Mifflin-St Jeor BMR (male/female variants, monotonicity, known values)
//! - TDEE with all three activity levels and their ordering
//! - BMI values and classification bands
//! - Goal-adjusted calorie targets
//! - Input validation failures with precondition-naming errors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitals_engine::{
    config::vitals_config::VitalsConfig,
    errors::ErrorCode,
    metrics::calculator::{
        calculate_bmi, calculate_calorie_target, calculate_daily_metrics,
        calculate_mifflin_st_jeor, calculate_tdee,
    },
    metrics::classify_bmi,
    metrics::profile::{ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile},
};

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male_reference_scenario() {
    let config = VitalsConfig::default();

    // Reference scenario: 25-year-old male, 80kg, 180cm
    let bmr =
        calculate_mifflin_st_jeor(80.0, 180.0, 25, BiologicalSex::Male, &config.bmr).unwrap();

    // Expected: 10 * 80 + 6.25 * 180 - 5 * 25 + 5 = 800 + 1125 - 125 + 5 = 1805
    assert!(
        (bmr - 1805.0).abs() < 1e-9,
        "BMR should be exactly 1805, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_female_typical() {
    let config = VitalsConfig::default();

    // Test case: 25-year-old female, 60kg, 165cm
    let bmr =
        calculate_mifflin_st_jeor(60.0, 165.0, 25, BiologicalSex::Female, &config.bmr).unwrap();

    // Expected: 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    assert!(
        (bmr - 1345.25).abs() < 1e-9,
        "BMR should be 1345.25, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_sex_constant_offset() {
    let config = VitalsConfig::default();

    // Male and female variants differ by a constant 166 kcal/day at equal inputs
    let male =
        calculate_mifflin_st_jeor(70.0, 175.0, 40, BiologicalSex::Male, &config.bmr).unwrap();
    let female =
        calculate_mifflin_st_jeor(70.0, 175.0, 40, BiologicalSex::Female, &config.bmr).unwrap();

    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_mifflin_st_jeor_monotonic_in_weight_and_height() {
    let config = VitalsConfig::default();

    let base =
        calculate_mifflin_st_jeor(80.0, 180.0, 25, BiologicalSex::Male, &config.bmr).unwrap();
    let heavier =
        calculate_mifflin_st_jeor(81.0, 180.0, 25, BiologicalSex::Male, &config.bmr).unwrap();
    let taller =
        calculate_mifflin_st_jeor(80.0, 181.0, 25, BiologicalSex::Male, &config.bmr).unwrap();

    assert!(heavier > base, "BMR must increase with weight");
    assert!(taller > base, "BMR must increase with height");
}

#[test]
fn test_mifflin_st_jeor_decreasing_in_age() {
    let config = VitalsConfig::default();

    let younger =
        calculate_mifflin_st_jeor(80.0, 180.0, 25, BiologicalSex::Male, &config.bmr).unwrap();
    let older =
        calculate_mifflin_st_jeor(80.0, 180.0, 26, BiologicalSex::Male, &config.bmr).unwrap();

    assert!(older < younger, "BMR must decrease with age");
}

#[test]
fn test_mifflin_st_jeor_no_lower_clamp() {
    let config = VitalsConfig::default();

    // Tiny subject: the formula result is reported as-is, preserving
    // monotonicity over the whole positive domain
    let bmr = calculate_mifflin_st_jeor(1.0, 1.0, 90, BiologicalSex::Female, &config.bmr).unwrap();

    // 10 + 6.25 - 450 - 161 = -594.75
    assert!((bmr - (-594.75)).abs() < 1e-9);
}

#[test]
fn test_mifflin_st_jeor_rejects_non_positive_inputs() {
    let config = VitalsConfig::default();

    let err = calculate_mifflin_st_jeor(0.0, 180.0, 25, BiologicalSex::Male, &config.bmr)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("weight_kg"));

    let err = calculate_mifflin_st_jeor(80.0, -180.0, 25, BiologicalSex::Male, &config.bmr)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("height_cm"));

    let err =
        calculate_mifflin_st_jeor(80.0, 180.0, 0, BiologicalSex::Male, &config.bmr).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("age_years"));
}

#[test]
fn test_mifflin_st_jeor_rejects_non_finite_inputs() {
    let config = VitalsConfig::default();

    assert!(
        calculate_mifflin_st_jeor(f64::NAN, 180.0, 25, BiologicalSex::Male, &config.bmr).is_err()
    );
    assert!(calculate_mifflin_st_jeor(80.0, f64::INFINITY, 25, BiologicalSex::Male, &config.bmr)
        .is_err());
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Factor Multipliers
// ============================================================================

#[test]
fn test_tdee_reference_scenario() {
    let config = VitalsConfig::default();

    // Reference scenario: BMR 1805, moderate activity
    let tdee = calculate_tdee(1805.0, ActivityLevel::Moderate, &config.activity_factors).unwrap();

    // 1805 * 1.55 = 2797.75
    assert!(
        (tdee - 2797.75).abs() < 1e-9,
        "TDEE should be 2797.75, got {tdee}"
    );
}

#[test]
fn test_tdee_sedentary_multiplier() {
    let config = VitalsConfig::default();

    let tdee = calculate_tdee(1500.0, ActivityLevel::Sedentary, &config.activity_factors).unwrap();
    assert!((tdee - 1800.0).abs() < 1e-9, "TDEE should be BMR * 1.2");
}

#[test]
fn test_tdee_active_multiplier() {
    let config = VitalsConfig::default();

    let tdee = calculate_tdee(2000.0, ActivityLevel::Active, &config.activity_factors).unwrap();
    assert!((tdee - 3450.0).abs() < 1e-9, "TDEE should be BMR * 1.725");
}

#[test]
fn test_tdee_strictly_ordered_by_activity_level() {
    let config = VitalsConfig::default();
    let bmr = 1650.0;

    let sedentary =
        calculate_tdee(bmr, ActivityLevel::Sedentary, &config.activity_factors).unwrap();
    let moderate = calculate_tdee(bmr, ActivityLevel::Moderate, &config.activity_factors).unwrap();
    let active = calculate_tdee(bmr, ActivityLevel::Active, &config.activity_factors).unwrap();

    assert!(active > moderate);
    assert!(moderate > sedentary);
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let config = VitalsConfig::default();

    let err = calculate_tdee(0.0, ActivityLevel::Moderate, &config.activity_factors).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("bmr"));

    assert!(calculate_tdee(-100.0, ActivityLevel::Active, &config.activity_factors).is_err());
}

// ============================================================================
// BMI CALCULATION AND CLASSIFICATION TESTS
// ============================================================================

#[test]
fn test_bmi_reference_scenario() {
    // 70 kg / (1.75 m)² = 22.857...
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!((bmi - 22.857).abs() < 1e-3, "BMI should be ~22.857, got {bmi}");
}

#[test]
fn test_bmi_rejects_non_positive_inputs() {
    let err = calculate_bmi(0.0, 175.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("weight_kg"));

    let err = calculate_bmi(70.0, 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("height_cm"));
}

#[test]
fn test_bmi_classification_with_default_bands() {
    let config = VitalsConfig::default();

    assert_eq!(
        classify_bmi(22.857, &config.bmi_bands).unwrap().label,
        "healthy"
    );
    assert_eq!(
        classify_bmi(17.9, &config.bmi_bands).unwrap().label,
        "underweight"
    );
    assert_eq!(
        classify_bmi(27.3, &config.bmi_bands).unwrap().label,
        "overweight"
    );
    assert_eq!(
        classify_bmi(34.0, &config.bmi_bands).unwrap().label,
        "obese"
    );
}

#[test]
fn test_bmi_band_boundaries_are_inclusive_below() {
    let config = VitalsConfig::default();

    // A boundary value lands in the band whose lower bound it equals
    assert_eq!(
        classify_bmi(18.5, &config.bmi_bands).unwrap().label,
        "healthy"
    );
    assert_eq!(
        classify_bmi(25.0, &config.bmi_bands).unwrap().label,
        "overweight"
    );
    assert_eq!(
        classify_bmi(30.0, &config.bmi_bands).unwrap().label,
        "obese"
    );
}

// ============================================================================
// CALORIE TARGET TESTS - Goal Adjustments
// ============================================================================

#[test]
fn test_maintenance_target_equals_tdee() {
    let config = VitalsConfig::default();

    let target =
        calculate_calorie_target(2797.75, HealthGoal::Maintenance, &config.calorie_goals).unwrap();
    assert!((target - 2797.75).abs() < 1e-9);
}

#[test]
fn test_weight_loss_target_applies_deficit() {
    let config = VitalsConfig::default();

    let target =
        calculate_calorie_target(2797.75, HealthGoal::WeightLoss, &config.calorie_goals).unwrap();
    assert!((target - 2297.75).abs() < 1e-9, "target should be TDEE - 500");
}

#[test]
fn test_muscle_gain_target_applies_surplus() {
    let config = VitalsConfig::default();

    let target =
        calculate_calorie_target(2797.75, HealthGoal::MuscleGain, &config.calorie_goals).unwrap();
    assert!((target - 3297.75).abs() < 1e-9, "target should be TDEE + 500");
}

#[test]
fn test_deficit_exceeding_tdee_rejected() {
    let config = VitalsConfig::default();

    // Default deficit is 500 kcal/day; a 400 kcal TDEE cannot absorb it
    let err =
        calculate_calorie_target(400.0, HealthGoal::WeightLoss, &config.calorie_goals).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_calorie_target_rejects_non_positive_tdee() {
    let config = VitalsConfig::default();

    assert!(calculate_calorie_target(0.0, HealthGoal::Maintenance, &config.calorie_goals).is_err());
}

// ============================================================================
// COMPOSED DAILY METRICS TESTS
// ============================================================================

#[test]
fn test_daily_metrics_reference_scenario() {
    let config = VitalsConfig::default();
    let profile = SubjectProfile::new(
        80.0,
        180.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    )
    .unwrap();

    let metrics = calculate_daily_metrics(&profile, &config).unwrap();

    assert!((metrics.bmr - 1805.0).abs() < 1e-9);
    assert!((metrics.tdee - 2797.75).abs() < 1e-9);
    assert!((metrics.bmi - 24.69).abs() < 1e-2);
    assert_eq!(metrics.bmi_band, "healthy");
    assert!((metrics.calorie_target - 2797.75).abs() < 1e-9);
    assert_eq!(metrics.activity_level, ActivityLevel::Moderate);
    assert_eq!(metrics.goal, HealthGoal::Maintenance);
}

#[test]
fn test_daily_metrics_weight_loss_goal() {
    let config = VitalsConfig::default();
    let profile = SubjectProfile::new(
        70.0,
        175.0,
        30,
        BiologicalSex::Female,
        ActivityLevel::Sedentary,
        HealthGoal::WeightLoss,
    )
    .unwrap();

    let metrics = calculate_daily_metrics(&profile, &config).unwrap();

    // BMR: 700 + 1093.75 - 150 - 161 = 1482.75; TDEE: * 1.2 = 1779.3
    assert!((metrics.bmr - 1482.75).abs() < 1e-9);
    assert!((metrics.tdee - 1779.3).abs() < 1e-9);
    assert!((metrics.calorie_target - 1279.3).abs() < 1e-9);
}

#[test]
fn test_daily_metrics_serializes_to_json() {
    let config = VitalsConfig::default();
    let profile = SubjectProfile::new(
        80.0,
        180.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::MuscleGain,
    )
    .unwrap();

    let metrics = calculate_daily_metrics(&profile, &config).unwrap();
    let json = serde_json::to_string(&metrics).unwrap();

    assert!(json.contains("\"bmr\""));
    assert!(json.contains("\"bmi_band\":\"healthy\""));
    assert!(json.contains("muscle_gain"));
}

#[test]
fn test_daily_metrics_uses_global_config() {
    // The global config falls back to defaults when no VITALS_* overrides
    // are present, so this must agree with the explicit-default scenario
    let profile = SubjectProfile::new(
        80.0,
        180.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    )
    .unwrap();

    let metrics = calculate_daily_metrics(&profile, VitalsConfig::global()).unwrap();
    assert!(metrics.bmr > 0.0);
    assert!(metrics.tdee > metrics.bmr);
}
