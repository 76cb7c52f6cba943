// ABOUTME: Subject profile types - biological sex, activity level, and health goal enums
// ABOUTME: Closed enumerations with strict parsing and a validated immutable profile struct
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex category for BMR formula selection
///
/// The Mifflin-St Jeor equation has exactly two published variants. This is a
/// closed enumeration: parsing anything else fails rather than silently
/// selecting a variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male formula variant (+5 constant)
    Male,
    /// Female formula variant (-161 constant)
    Female,
}

impl BiologicalSex {
    /// Get category name for logging and display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized sex category: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Activity level for TDEE calculation
///
/// Three levels with published multipliers (configurable): sedentary 1.2,
/// moderate 1.55, active 1.725.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Exercise 3-5 days/week
    Moderate,
    /// Heavy exercise 6-7 days/week
    Active,
}

impl ActivityLevel {
    /// Get level name for logging and display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }

    /// Get level description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Little to no exercise",
            Self::Moderate => "Exercise 3-5 days/week",
            Self::Active => "Heavy exercise 6-7 days/week",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized activity level: '{other}'. Valid options: sedentary, moderate, active"
            ))),
        }
    }
}

/// Health goal for daily calorie targeting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    #[default]
    Maintenance,
    /// Caloric surplus
    MuscleGain,
}

impl HealthGoal {
    /// Get goal name for logging and display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
        }
    }
}

impl FromStr for HealthGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight_loss" | "loss" => Ok(Self::WeightLoss),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "muscle_gain" | "gain" => Ok(Self::MuscleGain),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized health goal: '{other}'. Valid options: weight_loss, maintenance, muscle_gain"
            ))),
        }
    }
}

/// Immutable subject profile - the input to every calculation
///
/// Construction validates the numeric preconditions once; the calculator
/// entry points validate their own direct inputs as well, so partial values
/// passed around independently stay guarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Body weight in kilograms (> 0)
    pub weight_kg: f64,
    /// Height in centimeters (> 0)
    pub height_cm: f64,
    /// Age in years (> 0)
    pub age_years: u32,
    /// Biological sex for BMR formula selection
    pub sex: BiologicalSex,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Health goal for calorie targeting
    pub goal: HealthGoal,
}

impl SubjectProfile {
    /// Create a validated subject profile
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` naming the offending field when
    /// weight, height, or age is not positive
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: BiologicalSex,
        activity_level: ActivityLevel,
        goal: HealthGoal,
    ) -> Result<Self, AppError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("weight_kg must be positive"));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::invalid_input("height_cm must be positive"));
        }
        if age_years == 0 {
            return Err(AppError::invalid_input("age_years must be positive"));
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
            goal,
        })
    }
}
