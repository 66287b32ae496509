//! Single-patient (N-of-1) tumor burden modeling.
//!
//! The core is two pure steps: [`normalize`] anchors a batch of dated
//! measurements at the first visit, and [`fit_and_forecast`] fits a
//! least-squares line, projects it to the requested horizons and derives a
//! heuristic progression score. The risk score is a fixed linear transform of
//! the slope and must not be read as a calibrated probability.
//!
//! Everything else (CSV input, pipeline stages, writers, CLI) is a thin shell
//! around those two calls.

pub mod cli;
pub mod ctx;
pub mod error;
pub mod input;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod series;

pub use error::{CoreError, CoreResult};
pub use scores::{
    ForecastEntry, Prediction, RiskScore, TrendLabel, TrendModel, fit_and_forecast,
    fit_and_forecast_with,
};
pub use series::{Measurement, NormalizedSeries, SeriesPoint, normalize};
