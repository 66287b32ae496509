//! Heuristic progression risk and qualitative trend label.
//!
//! A slope of 0 mm/day maps to 50%, +0.5 mm/day or more saturates at 100% and
//! -0.5 mm/day or less at 0%. The constants are fixed and not derived from any
//! population data.

use super::{RiskScore, TrendLabel};

pub const RISK_SCALE: f64 = 100.0;
pub const RISK_MIDPOINT: f64 = 50.0;
/// Slopes below this are `shrinking`.
pub const STABLE_THRESHOLD: f64 = -0.5;
/// Slopes above this are `growing`.
pub const GROWTH_THRESHOLD: f64 = 0.0;

const RISK_MIN: f64 = 0.0;
const RISK_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskParams {
    pub scale: f64,
    pub midpoint: f64,
    pub stable_threshold: f64,
    pub growth_threshold: f64,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            scale: RISK_SCALE,
            midpoint: RISK_MIDPOINT,
            stable_threshold: STABLE_THRESHOLD,
            growth_threshold: GROWTH_THRESHOLD,
        }
    }
}

pub fn risk_score(slope: f64) -> RiskScore {
    risk_score_with(slope, &RiskParams::default())
}

pub fn risk_score_with(slope: f64, params: &RiskParams) -> RiskScore {
    let raw = slope * params.scale + params.midpoint;
    RiskScore {
        percent: raw.clamp(RISK_MIN, RISK_MAX),
    }
}

pub fn trend_label(slope: f64) -> TrendLabel {
    trend_label_with(slope, &RiskParams::default())
}

pub fn trend_label_with(slope: f64, params: &RiskParams) -> TrendLabel {
    if slope > params.growth_threshold {
        TrendLabel::Growing
    } else if slope < params.stable_threshold {
        TrendLabel::Shrinking
    } else {
        TrendLabel::Stable
    }
}
