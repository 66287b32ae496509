use std::path::Path;

use anyhow::{Context, Result};

use crate::scores::ForecastEntry;

pub const FORECAST_HEADER: [&str; 3] = ["horizon_days", "predicted_value", "predicted_date"];

/// Writes the forecast table in request order, dates as `YYYY-MM-DD`.
pub fn write_forecasts_csv(path: &Path, forecasts: &[ForecastEntry]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = csv::Writer::from_writer(std::io::BufWriter::new(file));

    w.write_record(FORECAST_HEADER)?;
    for f in forecasts {
        w.write_record([
            f.horizon_days.to_string(),
            f.predicted_value.to_string(),
            f.predicted_date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
