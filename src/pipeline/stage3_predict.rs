use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::stats::r_squared;
use crate::pipeline::Stage;
use crate::scores::fit_and_forecast_with;

pub struct Stage3Predict;

impl Stage3Predict {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Predict {
    fn name(&self) -> &'static str {
        "stage3_predict"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let series = ctx.series()?;
        let prediction = fit_and_forecast_with(series, &ctx.horizons, &ctx.risk_params)?;
        let r2 = r_squared(series, &prediction.model);
        info!(
            slope = prediction.model.slope,
            intercept = prediction.model.intercept,
            r_squared = r2,
            horizons = prediction.forecasts.len(),
            risk_percent = prediction.risk.percent,
            trend = %prediction.trend_label,
            "prediction_ready"
        );
        if prediction.forecasts.is_empty() {
            ctx.warnings
                .push("no forecast horizons requested".to_string());
        }
        ctx.prediction = Some(prediction);
        ctx.r_squared = Some(r2);
        Ok(())
    }
}
