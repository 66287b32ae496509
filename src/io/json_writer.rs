use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    BurdenReportV1, ForecastRow, InputMeta, ModelReport, ObservedPoint, RISK_NOTE, RiskReport,
};

pub fn build_report(ctx: &Ctx) -> Result<BurdenReportV1> {
    let series = ctx.series()?;
    let prediction = ctx.prediction()?;
    let model = &prediction.model;

    let input_meta = InputMeta {
        source: ctx.input.label(),
        measurements_read: ctx.measurements.len() as u64,
        measurements_dropped: series.dropped() as u64,
        origin: Some(series.origin()),
        points: series.len() as u64,
    };

    let observed = series
        .points()
        .iter()
        .map(|p| ObservedPoint {
            date: series.date_of(p),
            day_offset: p.day_offset,
            value: p.value,
        })
        .collect::<Vec<_>>();

    let forecasts = prediction
        .forecasts
        .iter()
        .map(|f| ForecastRow {
            horizon_days: f.horizon_days,
            predicted_value: f.predicted_value,
            predicted_date: f.predicted_date,
        })
        .collect::<Vec<_>>();

    let risk = RiskReport {
        percent: prediction.risk.percent,
        heuristic: true,
        note: RISK_NOTE.to_string(),
    };

    Ok(BurdenReportV1 {
        tool: ctx.report.tool.clone(),
        version: ctx.report.version.clone(),
        schema_version: ctx.report.schema_version.clone(),
        input_meta,
        model: Some(ModelReport {
            slope: model.slope,
            intercept: model.intercept,
            r_squared: ctx.r_squared.context("r_squared missing")?,
            n_points: series.len() as u64,
        }),
        forecasts,
        risk: Some(risk),
        trend_label: Some(prediction.trend_label),
        observed,
    })
}

pub fn write_json(path: &Path, report: &BurdenReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
