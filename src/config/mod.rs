// ABOUTME: Configuration management module for the metrics engine
// ABOUTME: Handles formula coefficients, threshold tables, and environment overrides
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module for the Vitals engine
//!
//! Centralized configuration for everything the calculator treats as data
//! rather than code:
//!
//! - **BMR**: Mifflin-St Jeor formula coefficients and sex constants
//! - **Activity factors**: TDEE multipliers per activity level
//! - **BMI bands**: the classification cut-point table
//! - **Calorie goals**: per-goal daily adjustments
//! - **Hydration**: default daily water goal
//!
//! Defaults come from `crate::constants`; every value can be overridden via
//! `VITALS_*` environment variables, and the assembled configuration is
//! validated before use.

/// Engine configuration with defaults, environment overrides, and validation
pub mod vitals_config;

pub use vitals_config::{ConfigError, VitalsConfig};
