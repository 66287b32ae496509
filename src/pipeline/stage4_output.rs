use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{csv_writer, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
        }
        if ctx.write_csv {
            csv_writer::write_forecasts_csv(&ctx.output.csv_path, &ctx.prediction()?.forecasts)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_trajectory_tsv(&ctx.output.tsv_path, ctx)?;
        }

        info!(out_dir = %ctx.output.out_dir.display(), "stage4_output_ready");
        Ok(())
    }
}
