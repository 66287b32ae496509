use std::path::PathBuf;

use anyhow::Context;

use crate::input::InputSource;
use crate::io::measurements::ColumnNames;
use crate::schema::v1::BurdenReportV1;
use crate::scores::{Prediction, RiskParams};
use crate::series::{Measurement, NormalizedSeries};

pub const JSON_FILE: &str = "nof1_burden.json";
pub const CSV_FILE: &str = "n_of_1_predictions.csv";
pub const TSV_FILE: &str = "trajectory.tsv";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Per-run state threaded through the pipeline stages.
#[derive(Debug)]
pub struct Ctx {
    pub input: InputSource,
    pub columns: ColumnNames,
    pub horizons: Vec<u32>,
    pub risk_params: RiskParams,
    pub write_json: bool,
    pub write_csv: bool,
    pub write_tsv: bool,
    pub warnings: Vec<String>,
    pub measurements: Vec<Measurement>,
    pub series: Option<NormalizedSeries>,
    pub prediction: Option<Prediction>,
    pub r_squared: Option<f64>,
    pub output: OutputPaths,
    pub report: BurdenReportV1,
}

impl Ctx {
    pub fn new(
        input: InputSource,
        out_dir: PathBuf,
        horizons: Vec<u32>,
        write_json: bool,
        write_csv: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join(JSON_FILE);
        let csv_path = out_dir.join(CSV_FILE);
        let tsv_path = out_dir.join(TSV_FILE);
        let report = BurdenReportV1::empty(tool_version, &input.label());
        Self {
            input,
            columns: ColumnNames::default(),
            horizons,
            risk_params: RiskParams::default(),
            write_json,
            write_csv,
            write_tsv,
            warnings: Vec::new(),
            measurements: Vec::new(),
            series: None,
            prediction: None,
            r_squared: None,
            output: OutputPaths {
                out_dir,
                json_path,
                csv_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn series(&self) -> anyhow::Result<&NormalizedSeries> {
        self.series.as_ref().context("normalized series missing")
    }

    pub fn prediction(&self) -> anyhow::Result<&Prediction> {
        self.prediction.as_ref().context("prediction missing")
    }
}
