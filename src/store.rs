//! Holds the active series for the selected point.
//!
//! The store is replaced wholesale on every successful fetch; there is no
//! incremental append and data from two fetches is never merged.

use crate::parsers::Sample;
use crate::state::{now_ms, EMPTY_SERIES_SPAN_MS};

/// Time bounds of a series in epoch milliseconds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeBounds {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl TimeBounds {
    /// Bounds used when the series is empty: the trailing 7 days ending at `now_ms`
    pub fn trailing_default(now_ms: i64) -> Self {
        Self {
            min_ms: now_ms - EMPTY_SERIES_SPAN_MS,
            max_ms: now_ms,
        }
    }

    pub fn span_ms(&self) -> i64 {
        self.max_ms - self.min_ms
    }
}

/// The full, sorted series of the current point
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    samples: Vec<Sample>,
    bounds: TimeBounds,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active series, computing empty-series bounds from the current time
    pub fn replace(&mut self, samples: Vec<Sample>) {
        self.replace_at(samples, now_ms());
    }

    /// Replace the active series.
    ///
    /// Samples are sorted ascending by time with a stable sort, so readings
    /// sharing a timestamp keep their arrival order.
    pub fn replace_at(&mut self, mut samples: Vec<Sample>, now_ms: i64) {
        samples.sort_by_key(|s| s.time_ms);

        self.bounds = match (samples.first(), samples.last()) {
            (Some(first), Some(last)) => TimeBounds {
                min_ms: first.time_ms,
                max_ms: last.time_ms,
            },
            _ => TimeBounds::trailing_default(now_ms),
        };
        self.samples = samples;
    }

    pub fn bounds(&self) -> TimeBounds {
        self.bounds
    }

    /// Read-only view of the whole series
    pub fn all(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
