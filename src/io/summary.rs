use anyhow::Result;

use crate::ctx::Ctx;

pub const RISK_CAPTION: &str =
    "Risk is a heuristic from this patient's own trend (N-of-1), not a clinical probability.";

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = &ctx.report.version;
    let series = ctx.series()?;
    let prediction = ctx.prediction()?;
    let model = &prediction.model;

    let mut out = String::new();
    out.push_str(&format!("nof1-burden v{}\n", version));
    out.push_str(&format!(
        "Input: {} points from {} (origin {}), dropped={}\n",
        series.len(),
        ctx.input.label(),
        series.origin(),
        series.dropped()
    ));
    out.push_str(&format!("Slope: {:.4} mm/day\n", model.slope));
    out.push_str(&format!("Intercept: {:.2} mm\n", model.intercept));
    if let Some(r2) = ctx.r_squared {
        out.push_str(&format!("R2: {:.4}\n", r2));
    }
    out.push_str(&format!("Trend: {}\n", prediction.trend_label));

    if prediction.forecasts.is_empty() {
        out.push_str("Forecasts: none\n");
    } else {
        out.push_str("Forecasts:\n");
        for f in &prediction.forecasts {
            out.push_str(&format!(
                "  +{}d {} {:.2} mm\n",
                f.horizon_days, f.predicted_date, f.predicted_value
            ));
        }
    }

    out.push_str(&format!("Progression risk: {:.1} %\n", prediction.risk.percent));
    out.push_str(RISK_CAPTION);
    out.push('\n');
    Ok(out)
}
