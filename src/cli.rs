use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::input::DEFAULT_HORIZONS;
use crate::io::measurements::{DEFAULT_DATE_COLUMN, DEFAULT_VALUE_COLUMN};
use crate::scores::risk::{RISK_MIDPOINT, RISK_SCALE};

#[derive(Debug, Parser)]
#[command(
    name = "nof1-burden",
    version,
    about = "N-of-1 tumor burden trend, forecasts and heuristic progression risk"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        required_unless_present = "demo",
        conflicts_with = "demo",
        help = "CSV with one row per visit (plain or .gz)"
    )]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Use the built-in example patient")]
    pub demo: bool,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(
        long = "horizon",
        value_delimiter = ',',
        default_values_t = DEFAULT_HORIZONS,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Forecast horizons in days after the first visit (repeatable)"
    )]
    pub horizons: Vec<u32>,

    #[arg(
        long,
        default_value_t = false,
        conflicts_with = "horizons",
        help = "Fit and score only, without forecasts"
    )]
    pub no_forecast: bool,

    #[command(flatten)]
    pub columns: ColumnArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Write n_of_1_predictions.csv")]
    pub csv: bool,

    #[arg(long, default_value_t = false, help = "Write trajectory.tsv (observed vs fitted)")]
    pub tsv: bool,

    #[arg(long, default_value_t = RISK_SCALE, value_parser = parse_positive_finite)]
    pub risk_scale: f64,

    #[arg(long, default_value_t = RISK_MIDPOINT, value_parser = parse_finite, allow_negative_numbers = true)]
    pub risk_midpoint: f64,
}

impl RunArgs {
    /// Horizons to forecast, empty with `--no-forecast`.
    pub fn requested_horizons(&self) -> Vec<u32> {
        if self.no_forecast {
            Vec::new()
        } else {
            self.horizons.clone()
        }
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "CSV with one row per visit (plain or .gz)")]
    pub input: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ColumnArgs {
    #[arg(long, default_value = DEFAULT_DATE_COLUMN)]
    pub date_column: String,

    #[arg(long, default_value = DEFAULT_VALUE_COLUMN)]
    pub value_column: String,
}

fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", raw));
    }
    Ok(value)
}

// A non-positive scale would make the score decrease as the slope grows.
fn parse_positive_finite(raw: &str) -> Result<f64, String> {
    let value = parse_finite(raw)?;
    if value <= 0.0 {
        return Err(format!("{} must be greater than 0", raw));
    }
    Ok(value)
}
