use std::path::PathBuf;

use chrono::NaiveDate;

use crate::series::Measurement;

/// Horizons offered when the caller requests none explicitly.
pub const DEFAULT_HORIZONS: [u32; 3] = [30, 90, 180];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Csv(PathBuf),
    Demo,
}

impl InputSource {
    pub fn from_args(input: Option<PathBuf>, demo: bool) -> Option<Self> {
        match (input, demo) {
            (Some(path), false) => Some(Self::Csv(path)),
            (None, true) => Some(Self::Demo),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Csv(path) => path.display().to_string(),
            Self::Demo => "demo".to_string(),
        }
    }
}

/// Reference patient shipped with the tool: five visits between 2022 and 2025.
pub fn demo_measurements() -> Vec<Measurement> {
    [
        ((2022, 3, 17), 182.0),
        ((2022, 6, 27), 79.0),
        ((2022, 8, 3), 79.0),
        ((2023, 7, 27), 520.0),
        ((2025, 11, 4), 510.0),
    ]
    .into_iter()
    .filter_map(|((y, m, d), value)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Measurement::new(date, value))
    })
    .collect()
}
