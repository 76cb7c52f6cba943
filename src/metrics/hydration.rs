// ABOUTME: Daily hydration goal progress calculation
// ABOUTME: Pure function mapping goal and consumed volume to progress state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Progress against a daily water goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationStatus {
    /// Daily goal (liters)
    pub goal_liters: f64,
    /// Volume consumed so far today (liters)
    pub consumed_liters: f64,
    /// Progress fraction in `[0, 1]`, clamped at the goal
    pub progress: f64,
    /// Volume still to drink (liters, zero once the goal is met)
    pub remaining_liters: f64,
    /// Whether the goal has been reached
    pub goal_met: bool,
}

/// Assess progress against a daily water goal
///
/// Progress is `consumed / goal` clamped to `[0, 1]`; drinking past the goal
/// does not report more than 100%.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the goal is not positive or the
/// consumed volume is negative
pub fn assess_hydration(goal_liters: f64, consumed_liters: f64) -> Result<HydrationStatus, AppError> {
    if !goal_liters.is_finite() || goal_liters <= 0.0 {
        return Err(AppError::invalid_input("goal_liters must be positive"));
    }
    if !consumed_liters.is_finite() || consumed_liters < 0.0 {
        return Err(AppError::invalid_input(
            "consumed_liters must not be negative",
        ));
    }

    let progress = (consumed_liters / goal_liters).clamp(0.0, 1.0);

    Ok(HydrationStatus {
        goal_liters,
        consumed_liters,
        progress,
        remaining_liters: (goal_liters - consumed_liters).max(0.0),
        goal_met: consumed_liters >= goal_liters,
    })
}
