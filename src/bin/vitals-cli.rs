// ABOUTME: Vitals CLI - command-line front end for the physiological metrics engine
// ABOUTME: Computes BMR/TDEE/BMI reports, BMI bands, and hydration progress from flags
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Full daily report
//! vitals-cli compute --weight-kg 80 --height-cm 180 --age 25 --sex male --activity moderate
//!
//! # Weight-loss target, machine-readable output
//! vitals-cli --format json compute --weight-kg 80 --height-cm 180 --age 25 \
//!     --sex male --activity moderate --goal weight_loss
//!
//! # BMI with classification band only
//! vitals-cli bmi --weight-kg 70 --height-cm 175
//!
//! # Hydration progress against the configured daily goal
//! vitals-cli hydration --consumed-liters 1.25
//!
//! # Show the configured BMI band table
//! vitals-cli bands
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use vitals_engine::config::vitals_config::VitalsConfig;
use vitals_engine::errors::{AppError, AppResult, ErrorResponse};
use vitals_engine::logging::LoggingConfig;
use vitals_engine::metrics::calculator::{calculate_bmi, calculate_daily_metrics};
use vitals_engine::metrics::classify_bmi;
use vitals_engine::metrics::hydration::assess_hydration;
use vitals_engine::metrics::profile::{
    ActivityLevel, BiologicalSex, HealthGoal, SubjectProfile,
};

#[derive(Parser)]
#[command(
    name = "vitals-cli",
    about = "Vitals physiological metrics CLI",
    long_about = "Command-line front end for the Vitals engine: BMR, TDEE, BMI with classification bands, goal-adjusted calorie targets, and hydration progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text report
    Text,
    /// Machine-readable JSON with a generation timestamp
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the full daily report for a subject profile
    Compute {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex (male, female)
        #[arg(long)]
        sex: String,

        /// Activity level (sedentary, moderate, active)
        #[arg(long)]
        activity: String,

        /// Health goal (weight_loss, maintenance, muscle_gain)
        #[arg(long, default_value = "maintenance")]
        goal: String,
    },

    /// Compute BMI and its classification band only
    Bmi {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
    },

    /// Assess progress against a daily water goal
    Hydration {
        /// Daily goal in liters (defaults to the configured goal)
        #[arg(long)]
        goal_liters: Option<f64>,

        /// Volume consumed so far today, in liters
        #[arg(long)]
        consumed_liters: f64,
    },

    /// Print the configured BMI classification band table
    Bands,
}

fn main() {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let format = cli.format;
    if let Err(error) = run(cli) {
        report_error(&error, format);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = VitalsConfig::global();

    match cli.command {
        Command::Compute {
            weight_kg,
            height_cm,
            age,
            sex,
            activity,
            goal,
        } => {
            let profile = SubjectProfile::new(
                weight_kg,
                height_cm,
                age,
                sex.parse::<BiologicalSex>()?,
                activity.parse::<ActivityLevel>()?,
                goal.parse::<HealthGoal>()?,
            )?;
            debug!(
                weight_kg,
                height_cm,
                age,
                sex = profile.sex.name(),
                activity = profile.activity_level.name(),
                goal = profile.goal.name(),
                "computing daily metrics"
            );

            let metrics = calculate_daily_metrics(&profile, config)?;

            match cli.format {
                OutputFormat::Json => print_json(serde_json::json!({
                    "profile": profile,
                    "metrics": metrics,
                }))?,
                OutputFormat::Text => {
                    println!("Daily report ({})", metrics.method);
                    println!(
                        "  Profile: {} {}y, {:.0} cm, {:.0} kg, {} activity",
                        profile.sex.name(),
                        profile.age_years,
                        profile.height_cm,
                        profile.weight_kg,
                        profile.activity_level.name()
                    );
                    println!("  BMR:            {:.0} kcal/day", metrics.bmr);
                    println!("  TDEE:           {:.0} kcal/day", metrics.tdee);
                    println!("  BMI:            {:.1} ({})", metrics.bmi, metrics.bmi_band);
                    println!(
                        "  Calorie target: {:.0} kcal/day ({})",
                        metrics.calorie_target,
                        metrics.goal.name()
                    );
                }
            }
        }

        Command::Bmi {
            weight_kg,
            height_cm,
        } => {
            let bmi = calculate_bmi(weight_kg, height_cm)?;
            let band = classify_bmi(bmi, &config.bmi_bands)?;

            match cli.format {
                OutputFormat::Json => print_json(serde_json::json!({
                    "bmi": bmi,
                    "band": band,
                }))?,
                OutputFormat::Text => println!("BMI: {:.1} ({})", bmi, band.label),
            }
        }

        Command::Hydration {
            goal_liters,
            consumed_liters,
        } => {
            let goal = goal_liters.unwrap_or(config.hydration.default_goal_liters);
            let status = assess_hydration(goal, consumed_liters)?;

            match cli.format {
                OutputFormat::Json => print_json(serde_json::json!({ "hydration": status }))?,
                OutputFormat::Text => {
                    println!(
                        "Hydration: {:.2} / {:.2} L ({:.0}%)",
                        status.consumed_liters,
                        status.goal_liters,
                        status.progress * 100.0
                    );
                    if status.goal_met {
                        println!("  Goal reached");
                    } else {
                        println!("  {:.2} L to go", status.remaining_liters);
                    }
                }
            }
        }

        Command::Bands => match cli.format {
            OutputFormat::Json => print_json(serde_json::json!({ "bands": config.bmi_bands }))?,
            OutputFormat::Text => {
                println!("BMI classification bands:");
                for band in &config.bmi_bands.bands {
                    println!("  >= {:>5.1}  {}", band.lower_bound, band.label);
                }
            }
        },
    }

    Ok(())
}

/// Print a JSON report with a generation timestamp on stdout
fn print_json(mut value: serde_json::Value) -> AppResult<()> {
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "generated_at".to_owned(),
            serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
        );
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Report a failure on stderr in the selected output format
fn report_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from(AppError::new(error.code, error.message.clone()));
            let rendered = serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| error.to_string());
            eprintln!("{rendered}");
        }
        OutputFormat::Text => eprintln!("Error: {error}"),
    }
}
