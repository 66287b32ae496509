use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::series::normalize;

pub struct Stage2Normalize;

impl Stage2Normalize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Normalize {
    fn name(&self) -> &'static str {
        "stage2_normalize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let series = normalize(&ctx.measurements)?;
        if series.dropped() > 0 {
            ctx.warnings.push(format!(
                "dropped {} measurement(s) with a missing, non-finite or negative value",
                series.dropped()
            ));
        }
        info!(
            origin = %series.origin(),
            points = series.len(),
            dropped = series.dropped(),
            "series_ready"
        );
        ctx.series = Some(series);
        Ok(())
    }
}
