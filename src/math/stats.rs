//! Fit diagnostics over a normalized series.

use crate::scores::TrendModel;
use crate::series::NormalizedSeries;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Observed minus fitted value, one per point.
pub fn residuals(series: &NormalizedSeries, model: &TrendModel) -> Vec<f64> {
    series
        .points()
        .iter()
        .map(|p| p.value - model.predict_at(p.day_offset as f64))
        .collect()
}

/// Coefficient of determination of `model` on `series`.
///
/// A series with no variance in value is fitted exactly by a flat line, which
/// reports 1.0.
pub fn r_squared(series: &NormalizedSeries, model: &TrendModel) -> f64 {
    let values: Vec<f64> = series.points().iter().map(|p| p.value).collect();
    let mean_y = mean(&values);
    let ss_tot: f64 = values.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = residuals(series, model).iter().map(|r| r.powi(2)).sum();
    if ss_tot == 0.0 {
        return 1.0;
    }
    1.0 - ss_res / ss_tot
}
