use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

/// Observed and fitted burden per visit, followed by forecast rows, for
/// plotting the real vs predicted curve.
pub fn write_trajectory_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let series = ctx.series()?;
    let prediction = ctx.prediction()?;
    let model = &prediction.model;

    writeln!(w, "date\tday_offset\tobserved_mm\tfitted_mm\tkind")?;
    for p in series.points() {
        writeln!(
            w,
            "{}\t{}\t{:.6}\t{:.6}\tobserved",
            series.date_of(p),
            p.day_offset,
            p.value,
            model.predict_at(p.day_offset as f64)
        )?;
    }
    for f in &prediction.forecasts {
        writeln!(
            w,
            "{}\t{}\t\t{:.6}\tforecast",
            f.predicted_date, f.horizon_days, f.predicted_value
        )?;
    }
    w.flush()?;
    Ok(())
}
