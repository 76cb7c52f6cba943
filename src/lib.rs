// ABOUTME: Main library entry point for the Vitals physiological metrics engine
// ABOUTME: Exposes the metrics calculator, subject profiles, configuration, logging, and errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Vitals Engine
//!
//! A deterministic physiological metrics engine. Given a subject profile
//! (weight, height, age, biological sex, activity level), the engine derives
//! energy and body-composition metrics using fixed, published formulas:
//!
//! - **BMR**: Basal Metabolic Rate via the Mifflin-St Jeor equation
//! - **TDEE**: Total Daily Energy Expenditure via activity factor multipliers
//! - **BMI**: Body Mass Index with configurable classification bands
//! - **Calorie targets**: goal-adjusted daily intake (deficit/maintenance/surplus)
//! - **Hydration**: daily water goal progress
//!
//! Every operation is a pure, synchronous, side-effect-free function of its
//! inputs. There is no stored state, no I/O, and no failure mode beyond input
//! validation; callers may invoke the engine concurrently without coordination.
//!
//! ## Example Usage
//!
//! ```rust
//! use vitals_engine::config::vitals_config::VitalsConfig;
//! use vitals_engine::errors::AppResult;
//! use vitals_engine::metrics::calculator::calculate_daily_metrics;
//! use vitals_engine::metrics::profile::{
//!     ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile,
//! };
//!
//! fn main() -> AppResult<()> {
//!     let profile = SubjectProfile::new(
//!         80.0,
//!         180.0,
//!         25,
//!         BiologicalSex::Male,
//!         ActivityLevel::Moderate,
//!         HealthGoal::Maintenance,
//!     )?;
//!
//!     let metrics = calculate_daily_metrics(&profile, VitalsConfig::global())?;
//!     println!("BMR: {:.0} kcal/day, TDEE: {:.0} kcal/day", metrics.bmr, metrics.tdee);
//!
//!     Ok(())
//! }
//! ```

/// Configuration management for formula coefficients and threshold tables
pub mod config;

/// Physiological constants and validation limits
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Structured logging configuration for the CLI surface
pub mod logging;

/// Subject profiles and derived metric calculations
pub mod metrics;
