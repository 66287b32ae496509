use thiserror::Error;

/// Failures raised by the modeling core. Every variant is terminal for the
/// current analysis run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("no usable measurements in series")]
    EmptySeries,

    #[error("not enough data to predict: {distinct_offsets} distinct day offset(s), need at least 2")]
    InsufficientData { distinct_offsets: usize },

    #[error("trend fit overflowed: measurement values are too large to fit")]
    NumericOverflow,

    #[error("forecast horizon must be a positive number of days, got {0}")]
    InvalidHorizon(u32),

    #[error("predicted date {horizon_days} days after {origin} is out of range")]
    DateOutOfRange {
        origin: chrono::NaiveDate,
        horizon_days: u32,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
