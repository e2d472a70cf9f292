//! Auxiliary chart series shown beside a row.

use serde::{Deserialize, Serialize};

/// One point of the two-series area chart in the detail drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub series_a: u32,
    pub series_b: u32,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, series_a: u32, series_b: u32) -> Self {
        Self {
            label: label.into(),
            series_a,
            series_b,
        }
    }

    /// Stacked height of the point.
    pub fn total(&self) -> u32 {
        self.series_a.saturating_add(self.series_b)
    }
}

/// The fixed six-month sample series. Display only; unrelated to any row.
pub fn sample_series() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("January", 186, 80),
        SeriesPoint::new("February", 305, 200),
        SeriesPoint::new("March", 237, 120),
        SeriesPoint::new("April", 73, 190),
        SeriesPoint::new("May", 209, 130),
        SeriesPoint::new("June", 214, 140),
    ]
}
