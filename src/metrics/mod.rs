// ABOUTME: Metrics module grouping subject profiles and derived physiological calculations
// ABOUTME: Provides BMR, TDEE, BMI, calorie target, and hydration computations

//! Physiological Metrics Module
//!
//! This module contains the deterministic core of the engine: a validated
//! subject profile and the pure functions deriving energy and body metrics
//! from it.
//!
//! # Design Philosophy
//!
//! - **Type Safety**: sex, activity level, and goal are closed enums, not strings
//! - **Strict validation**: unrecognized categories fail with `InvalidInput`;
//!   there are no silent fallback branches
//! - **Data over literals**: coefficients, multipliers, and cut-points come
//!   from configuration, never inline constants at call sites
//!
//! # Example
//!
//! ```rust,no_run
//! use vitals_engine::config::vitals_config::VitalsConfig;
//! use vitals_engine::metrics::calculator::calculate_mifflin_st_jeor;
//! use vitals_engine::metrics::profile::BiologicalSex;
//!
//! let config = VitalsConfig::global();
//! let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 25, BiologicalSex::Male, &config.bmr)?;
//! # Ok::<(), vitals_engine::errors::AppError>(())
//! ```

pub mod bmi_bands;
pub mod calculator;
pub mod hydration;
pub mod profile;

// Re-export the calculation surface
pub use bmi_bands::classify_bmi;
pub use calculator::{
    calculate_bmi, calculate_calorie_target, calculate_daily_metrics, calculate_mifflin_st_jeor,
    calculate_tdee, DailyMetrics,
};
pub use hydration::{assess_hydration, HydrationStatus};
pub use profile::{ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile};
