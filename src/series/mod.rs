//! Series normalization.
//!
//! Turns a batch of raw measurements into a time-ordered series of
//! `(day_offset, value)` points anchored at the earliest measurement date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One clinical observation: sum of tumor diameters in millimeters.
///
/// `value` is `None` when the source had no usable number for the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub timestamp: NaiveDate,
    pub value: Option<f64>,
}

impl Measurement {
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        Self {
            timestamp,
            value: Some(value),
        }
    }

    pub fn missing(timestamp: NaiveDate) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    fn usable_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day_offset: i64,
    pub value: f64,
}

/// Time-ordered series anchored at `origin`. Points are sorted
/// non-decreasing by `day_offset` and there is always at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    origin: NaiveDate,
    points: Vec<SeriesPoint>,
    dropped: usize,
}

impl NormalizedSeries {
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of input measurements discarded for a missing, non-finite or
    /// negative value.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of distinct day offsets; a linear fit needs at least two.
    pub fn distinct_offsets(&self) -> usize {
        let mut count = 0usize;
        let mut last = None;
        for p in &self.points {
            if last != Some(p.day_offset) {
                count += 1;
                last = Some(p.day_offset);
            }
        }
        count
    }

    /// Calendar date of a point.
    pub fn date_of(&self, point: &SeriesPoint) -> NaiveDate {
        self.origin + chrono::Days::new(point.day_offset as u64)
    }
}

/// Sorts the measurements by date (stable), anchors them at the earliest date
/// and drops rows without a usable value.
///
/// The origin is taken over every input measurement, including rows that are
/// dropped afterwards.
pub fn normalize(measurements: &[Measurement]) -> CoreResult<NormalizedSeries> {
    let mut ordered: Vec<&Measurement> = measurements.iter().collect();
    ordered.sort_by_key(|m| m.timestamp);

    let origin = ordered.first().ok_or(CoreError::EmptySeries)?.timestamp;

    let mut points = Vec::with_capacity(ordered.len());
    let mut dropped = 0usize;
    for m in ordered {
        match m.usable_value() {
            Some(value) => points.push(SeriesPoint {
                day_offset: (m.timestamp - origin).num_days(),
                value,
            }),
            None => dropped += 1,
        }
    }

    if points.is_empty() {
        return Err(CoreError::EmptySeries);
    }

    Ok(NormalizedSeries {
        origin,
        points,
        dropped,
    })
}
