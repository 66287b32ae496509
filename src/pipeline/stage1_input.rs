use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::input::{self, InputSource};
use crate::io::measurements::read_measurements;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let measurements = match &ctx.input {
            InputSource::Csv(path) => {
                if !path.exists() {
                    bail!("input file not found: {}", path.display());
                }
                info!(
                    input = %path.display(),
                    date_column = %ctx.columns.date,
                    value_column = %ctx.columns.value,
                    "input_file"
                );
                read_measurements(path, &ctx.columns)?
            }
            InputSource::Demo => input::demo_measurements(),
        };

        let missing = measurements.iter().filter(|m| m.value.is_none()).count();
        info!(
            measurements = measurements.len(),
            missing = missing,
            "measurements_loaded"
        );
        ctx.report.input_meta.measurements_read = measurements.len() as u64;
        ctx.measurements = measurements;
        Ok(())
    }
}
