use crate::error::{CoreError, CoreResult};
use crate::series::NormalizedSeries;

use super::TrendModel;

/// Ordinary least-squares fit of value on day offset.
///
/// Fails when fewer than two distinct day offsets exist, where the slope is
/// undefined.
pub fn fit_trend(series: &NormalizedSeries) -> CoreResult<TrendModel> {
    let distinct_offsets = series.distinct_offsets();
    if distinct_offsets < 2 {
        return Err(CoreError::InsufficientData { distinct_offsets });
    }

    let points = series.points();
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.day_offset as f64).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.value).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for p in points {
        let dx = p.day_offset as f64 - mean_x;
        numerator += dx * (p.value - mean_y);
        denominator += dx * dx;
    }

    // Distinct integer offsets keep the denominator strictly positive.
    if denominator <= 0.0 {
        return Err(CoreError::InsufficientData { distinct_offsets });
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(CoreError::NumericOverflow);
    }
    Ok(TrendModel { slope, intercept })
}
