//! Trend prediction over a normalized series.
//!
//! The model is a single global least-squares line, so every output can be
//! explained from two numbers: the slope (mm/day) and the intercept (mm).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::series::NormalizedSeries;

pub mod forecast;
pub mod risk;
pub mod trend;

pub use risk::RiskParams;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    /// mm/day
    pub slope: f64,
    /// mm at day offset 0
    pub intercept: f64,
}

impl TrendModel {
    /// Value of the fitted line `day_offset` days after the origin.
    pub fn predict_at(&self, day_offset: f64) -> f64 {
        self.intercept + self.slope * day_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub horizon_days: u32,
    pub predicted_value: f64,
    pub predicted_date: NaiveDate,
}

/// Heuristic progression score in `[0, 100]`.
///
/// This is a linear transform of the slope with fixed constants. It is not a
/// calibrated clinical probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Growing,
    Shrinking,
    Stable,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Growing => "growing",
            TrendLabel::Shrinking => "shrinking",
            TrendLabel::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub model: TrendModel,
    pub forecasts: Vec<ForecastEntry>,
    pub risk: RiskScore,
    pub trend_label: TrendLabel,
}

/// Fits the trend, projects it to `horizons` (caller order, duplicates kept)
/// and derives the risk score and label with the default constants.
pub fn fit_and_forecast(series: &NormalizedSeries, horizons: &[u32]) -> CoreResult<Prediction> {
    fit_and_forecast_with(series, horizons, &RiskParams::default())
}

pub fn fit_and_forecast_with(
    series: &NormalizedSeries,
    horizons: &[u32],
    params: &RiskParams,
) -> CoreResult<Prediction> {
    let model = trend::fit_trend(series)?;
    let forecasts = forecast::forecast(&model, series.origin(), horizons)?;
    Ok(Prediction {
        model,
        forecasts,
        risk: risk::risk_score_with(model.slope, params),
        trend_label: risk::trend_label_with(model.slope, params),
    })
}
