use chrono::{Days, NaiveDate};

use crate::error::{CoreError, CoreResult};

use super::{ForecastEntry, TrendModel};

/// Projects the fitted line to each horizon, in the order given.
///
/// Predicted values are not clamped; a shrinking trend can forecast a
/// negative burden.
pub fn forecast(
    model: &TrendModel,
    origin: NaiveDate,
    horizons: &[u32],
) -> CoreResult<Vec<ForecastEntry>> {
    horizons
        .iter()
        .map(|&horizon_days| forecast_one(model, origin, horizon_days))
        .collect()
}

fn forecast_one(model: &TrendModel, origin: NaiveDate, horizon_days: u32) -> CoreResult<ForecastEntry> {
    if horizon_days == 0 {
        return Err(CoreError::InvalidHorizon(horizon_days));
    }
    let predicted_date = origin
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .ok_or(CoreError::DateOutOfRange {
            origin,
            horizon_days,
        })?;
    let predicted_value = model.predict_at(f64::from(horizon_days));
    if !predicted_value.is_finite() {
        return Err(CoreError::NumericOverflow);
    }
    Ok(ForecastEntry {
        horizon_days,
        predicted_value,
        predicted_date,
    })
}
