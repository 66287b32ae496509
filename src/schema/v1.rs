use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scores::TrendLabel;

pub const RISK_NOTE: &str = "heuristic linear transform of the trend slope; not a calibrated clinical probability";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub source: String,
    pub measurements_read: u64,
    pub measurements_dropped: u64,
    pub origin: Option<NaiveDate>,
    pub points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReport {
    /// mm/day
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n_points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub horizon_days: u32,
    pub predicted_value: f64,
    pub predicted_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub percent: f64,
    pub heuristic: bool,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservedPoint {
    pub date: NaiveDate,
    pub day_offset: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurdenReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub model: Option<ModelReport>,
    pub forecasts: Vec<ForecastRow>,
    pub risk: Option<RiskReport>,
    pub trend_label: Option<TrendLabel>,
    pub observed: Vec<ObservedPoint>,
}

impl BurdenReportV1 {
    pub fn empty(tool_version: &str, source: &str) -> Self {
        Self {
            tool: "nof1-burden".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                source: source.to_string(),
                measurements_read: 0,
                measurements_dropped: 0,
                origin: None,
                points: 0,
            },
            model: None,
            forecasts: Vec::new(),
            risk: None,
            trend_label: None,
            observed: Vec::new(),
        }
    }
}
