// ABOUTME: Tests for subject profile construction and strict category parsing
// ABOUTME: Covers closed-enum parsing, profile validation, and hydration edge cases
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitals_engine::{
    errors::ErrorCode,
    metrics::hydration::assess_hydration,
    metrics::profile::{ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile},
};

// ============================================================================
// CLOSED ENUMERATION PARSING - no silent fallbacks
// ============================================================================

#[test]
fn test_sex_parses_known_values_case_insensitively() {
    assert_eq!("male".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
    assert_eq!(
        "FEMALE".parse::<BiologicalSex>().unwrap(),
        BiologicalSex::Female
    );
}

#[test]
fn test_sex_rejects_unrecognized_values() {
    // Lenient parsers map every non-male value to the female formula
    // branch; that fallback is deliberately not provided here
    for input in ["other", "unknown", "x", ""] {
        let err = input.parse::<BiologicalSex>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("Valid options"));
    }
}

#[test]
fn test_activity_level_parses_known_values() {
    assert_eq!(
        "sedentary".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::Sedentary
    );
    assert_eq!(
        "Moderate".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::Moderate
    );
    assert_eq!(
        "ACTIVE".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::Active
    );
}

#[test]
fn test_activity_level_rejects_unrecognized_values() {
    // No default-to-sedentary path: unknown levels fail loudly
    for input in ["light", "extreme", "1.55", ""] {
        let err = input.parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("sedentary"));
    }
}

#[test]
fn test_health_goal_parsing_and_aliases() {
    assert_eq!(
        "weight_loss".parse::<HealthGoal>().unwrap(),
        HealthGoal::WeightLoss
    );
    assert_eq!("loss".parse::<HealthGoal>().unwrap(), HealthGoal::WeightLoss);
    assert_eq!(
        "maintenance".parse::<HealthGoal>().unwrap(),
        HealthGoal::Maintenance
    );
    assert_eq!("gain".parse::<HealthGoal>().unwrap(), HealthGoal::MuscleGain);
    assert!("bulk".parse::<HealthGoal>().is_err());
}

#[test]
fn test_enum_serde_round_trip_uses_snake_case() {
    let json = serde_json::to_string(&ActivityLevel::Moderate).unwrap();
    assert_eq!(json, "\"moderate\"");

    let parsed: BiologicalSex = serde_json::from_str("\"female\"").unwrap();
    assert_eq!(parsed, BiologicalSex::Female);
}

// ============================================================================
// SUBJECT PROFILE VALIDATION
// ============================================================================

#[test]
fn test_profile_accepts_valid_inputs() {
    let profile = SubjectProfile::new(
        80.0,
        180.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    );
    assert!(profile.is_ok());
}

#[test]
fn test_profile_errors_name_the_offending_field() {
    let err = SubjectProfile::new(
        -5.0,
        180.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    )
    .unwrap_err();
    assert!(err.message.contains("weight_kg"));

    let err = SubjectProfile::new(
        80.0,
        0.0,
        25,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    )
    .unwrap_err();
    assert!(err.message.contains("height_cm"));

    let err = SubjectProfile::new(
        80.0,
        180.0,
        0,
        BiologicalSex::Male,
        ActivityLevel::Moderate,
        HealthGoal::Maintenance,
    )
    .unwrap_err();
    assert!(err.message.contains("age_years"));
}

#[test]
fn test_profile_serializes_with_category_names() {
    let profile = SubjectProfile::new(
        70.0,
        175.0,
        30,
        BiologicalSex::Female,
        ActivityLevel::Active,
        HealthGoal::WeightLoss,
    )
    .unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"sex\":\"female\""));
    assert!(json.contains("\"activity_level\":\"active\""));
    assert!(json.contains("\"goal\":\"weight_loss\""));
}

// ============================================================================
// HYDRATION PROGRESS
// ============================================================================

#[test]
fn test_hydration_progress_fraction() {
    let status = assess_hydration(2.5, 1.25).unwrap();
    assert!((status.progress - 0.5).abs() < 1e-9);
    assert!((status.remaining_liters - 1.25).abs() < 1e-9);
    assert!(!status.goal_met);
}

#[test]
fn test_hydration_goal_exactly_met() {
    let status = assess_hydration(2.0, 2.0).unwrap();
    assert!((status.progress - 1.0).abs() < 1e-9);
    assert!(status.goal_met);
    assert!((status.remaining_liters).abs() < 1e-9);
}

#[test]
fn test_hydration_overshoot_clamps() {
    let status = assess_hydration(2.0, 5.0).unwrap();
    assert!((status.progress - 1.0).abs() < 1e-9);
    assert!(status.goal_met);
}

#[test]
fn test_hydration_rejects_invalid_inputs() {
    let err = assess_hydration(0.0, 1.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("goal_liters"));

    let err = assess_hydration(2.5, -1.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("consumed_liters"));
}
