// ABOUTME: Engine configuration with const defaults, VITALS_* env overrides, and validation
// ABOUTME: Covers BMR coefficients, activity factors, BMI bands, calorie goals, and hydration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Vitals Configuration Module
//!
//! Provides type-safe configuration for the metrics calculator. Formula
//! coefficients, multiplier tables, and classification cut-points are data:
//! they default to the published values in `crate::constants`, accept
//! environment variable overrides, and are validated as a whole before the
//! engine uses them.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{
    activity_factors, bmi, calorie_goals, hydration, limits, mifflin_st_jeor,
};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Main engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsConfig {
    pub bmr: BmrConfig,
    pub activity_factors: ActivityFactorsConfig,
    pub bmi_bands: BmiBandsConfig,
    pub calorie_goals: CalorieGoalConfig,
    pub hydration: HydrationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Moderate (exercise 3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (heavy exercise 6-7 days/week): 1.725
    pub active: f64,
}

/// One BMI classification band
///
/// A band covers the half-open interval `[lower_bound, next band's lower_bound)`;
/// the last band is unbounded above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiBand {
    /// Inclusive lower bound of the band (kg/m²)
    pub lower_bound: f64,
    /// Human-readable band label
    pub label: String,
}

/// BMI classification band table
///
/// Published cut-point conventions disagree (18-25, 18.5-25, 18.5-24.9 all
/// appear in the wild); one convention is chosen deliberately and kept as
/// data. Defaults follow the WHO cut-points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiBandsConfig {
    /// Bands in ascending `lower_bound` order; the first must start at 0
    pub bands: Vec<BmiBand>,
}

/// Per-goal daily calorie adjustments applied on top of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieGoalConfig {
    /// Daily deficit for weight loss (kcal/day, positive magnitude)
    pub weight_loss_deficit: f64,
    /// Daily surplus for muscle gain (kcal/day, positive magnitude)
    pub muscle_gain_surplus: f64,
}

/// Hydration tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Default daily water goal (liters), used when the caller supplies none
    pub default_goal_liters: f64,
}

/// Global configuration singleton
static VITALS_CONFIG: OnceLock<VitalsConfig> = OnceLock::new();

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            bmr: Self::default_bmr_config(),
            activity_factors: Self::default_activity_factors_config(),
            bmi_bands: Self::default_bmi_bands_config(),
            calorie_goals: Self::default_calorie_goal_config(),
            hydration: Self::default_hydration_config(),
        }
    }
}

impl VitalsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        VITALS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load vitals config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate BMR coefficients carry the signs the formula assumes
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must be negative",
            ));
        }

        // Validate activity factors are plausible and ascending
        if self.activity_factors.sedentary < limits::MIN_ACTIVITY_FACTOR
            || self.activity_factors.active > limits::MAX_ACTIVITY_FACTOR
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if self.activity_factors.sedentary >= self.activity_factors.moderate
            || self.activity_factors.moderate >= self.activity_factors.active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        // Validate the BMI band table
        if self.bmi_bands.bands.is_empty() {
            return Err(ConfigError::InvalidRange(
                "BMI band table must not be empty",
            ));
        }
        if self.bmi_bands.bands[0].lower_bound != 0.0 {
            return Err(ConfigError::InvalidRange(
                "First BMI band must start at 0",
            ));
        }
        for pair in self.bmi_bands.bands.windows(2) {
            if pair[0].lower_bound >= pair[1].lower_bound {
                return Err(ConfigError::InvalidRange(
                    "BMI band lower bounds must be strictly ascending",
                ));
            }
        }
        if self.bmi_bands.bands.iter().any(|b| b.label.is_empty()) {
            return Err(ConfigError::InvalidRange(
                "BMI band labels must not be empty",
            ));
        }

        // Validate calorie goal adjustments
        if self.calorie_goals.weight_loss_deficit < 0.0
            || self.calorie_goals.weight_loss_deficit > limits::MAX_GOAL_ADJUSTMENT
        {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss deficit must be between 0 and 1500 kcal/day",
            ));
        }
        if self.calorie_goals.muscle_gain_surplus < 0.0
            || self.calorie_goals.muscle_gain_surplus > limits::MAX_GOAL_ADJUSTMENT
        {
            return Err(ConfigError::ValueOutOfRange(
                "Muscle gain surplus must be between 0 and 1500 kcal/day",
            ));
        }

        // Validate hydration defaults
        if self.hydration.default_goal_liters <= 0.0
            || self.hydration.default_goal_liters > hydration::MAX_DAILY_GOAL_LITERS
        {
            return Err(ConfigError::ValueOutOfRange(
                "Default hydration goal must be between 0 and 10 liters",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR formula overrides
        if let Ok(val) = std::env::var("VITALS_BMR_WEIGHT_COEF") {
            self.bmr.msj_weight_coef = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_BMR_WEIGHT_COEF".into()))?;
        }

        if let Ok(val) = std::env::var("VITALS_BMR_HEIGHT_COEF") {
            self.bmr.msj_height_coef = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_BMR_HEIGHT_COEF".into()))?;
        }

        if let Ok(val) = std::env::var("VITALS_BMR_AGE_COEF") {
            self.bmr.msj_age_coef = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_BMR_AGE_COEF".into()))?;
        }

        // Activity factor overrides
        if let Ok(val) = std::env::var("VITALS_ACTIVITY_SEDENTARY") {
            self.activity_factors.sedentary = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_ACTIVITY_SEDENTARY".into()))?;
        }

        if let Ok(val) = std::env::var("VITALS_ACTIVITY_MODERATE") {
            self.activity_factors.moderate = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_ACTIVITY_MODERATE".into()))?;
        }

        if let Ok(val) = std::env::var("VITALS_ACTIVITY_ACTIVE") {
            self.activity_factors.active = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_ACTIVITY_ACTIVE".into()))?;
        }

        // Calorie goal overrides
        if let Ok(val) = std::env::var("VITALS_GOAL_WEIGHT_LOSS_DEFICIT") {
            self.calorie_goals.weight_loss_deficit = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid VITALS_GOAL_WEIGHT_LOSS_DEFICIT".into())
            })?;
        }

        if let Ok(val) = std::env::var("VITALS_GOAL_MUSCLE_GAIN_SURPLUS") {
            self.calorie_goals.muscle_gain_surplus = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid VITALS_GOAL_MUSCLE_GAIN_SURPLUS".into())
            })?;
        }

        // Hydration overrides
        if let Ok(val) = std::env::var("VITALS_HYDRATION_GOAL_LITERS") {
            self.hydration.default_goal_liters = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid VITALS_HYDRATION_GOAL_LITERS".into()))?;
        }

        Ok(self)
    }

    /// Create default BMR configuration
    /// Based on the Mifflin-St Jeor equation (Mifflin et al. 1990)
    const fn default_bmr_config() -> BmrConfig {
        BmrConfig {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }

    /// Create default activity factors configuration
    /// Based on `McArdle` et al. (2010) Exercise Physiology
    const fn default_activity_factors_config() -> ActivityFactorsConfig {
        ActivityFactorsConfig {
            sedentary: activity_factors::SEDENTARY,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
        }
    }

    /// Create the default WHO BMI band table
    fn default_bmi_bands_config() -> BmiBandsConfig {
        BmiBandsConfig {
            bands: vec![
                BmiBand {
                    lower_bound: 0.0,
                    label: "underweight".into(),
                },
                BmiBand {
                    lower_bound: bmi::HEALTHY_LOWER_BOUND,
                    label: "healthy".into(),
                },
                BmiBand {
                    lower_bound: bmi::OVERWEIGHT_LOWER_BOUND,
                    label: "overweight".into(),
                },
                BmiBand {
                    lower_bound: bmi::OBESE_LOWER_BOUND,
                    label: "obese".into(),
                },
            ],
        }
    }

    /// Create default calorie goal configuration
    const fn default_calorie_goal_config() -> CalorieGoalConfig {
        CalorieGoalConfig {
            weight_loss_deficit: calorie_goals::WEIGHT_LOSS_DEFICIT,
            muscle_gain_surplus: calorie_goals::MUSCLE_GAIN_SURPLUS,
        }
    }

    /// Create default hydration configuration
    const fn default_hydration_config() -> HydrationConfig {
        HydrationConfig {
            default_goal_liters: hydration::DEFAULT_DAILY_GOAL_LITERS,
        }
    }
}
