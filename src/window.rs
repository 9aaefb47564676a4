//! Trailing time-window filter over the active series.

use crate::parsers::Sample;
use crate::state::{now_ms, WindowHours};
use crate::store::TimeBounds;

/// The part of the series that falls inside the selected window
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleSlice {
    /// Window start in epoch milliseconds (inclusive)
    pub start_ms: i64,
    /// Window end in epoch milliseconds (inclusive)
    pub end_ms: i64,
    pub samples: Vec<Sample>,
}

impl VisibleSlice {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when any reading in the window is a number strictly above zero
    pub fn has_positive_measurement(&self) -> bool {
        self.samples.iter().any(Sample::has_positive_value)
    }
}

/// Compute the visible slice, using the current time when the series has no end
pub fn apply(series: &[Sample], bounds: TimeBounds, window: WindowHours) -> VisibleSlice {
    apply_at(series, bounds, window, now_ms())
}

/// Compute the visible slice.
///
/// `end` is the series maximum (or `now_ms` when that is zero) and `start`
/// is `max(min, end - window)`. Samples on either edge are included.
pub fn apply_at(
    series: &[Sample],
    bounds: TimeBounds,
    window: WindowHours,
    now_ms: i64,
) -> VisibleSlice {
    let end_ms = if bounds.max_ms != 0 {
        bounds.max_ms
    } else {
        now_ms
    };
    let start_ms = bounds.min_ms.max(end_ms - window.millis());

    let samples = series
        .iter()
        .filter(|s| s.time_ms >= start_ms && s.time_ms <= end_ms)
        .cloned()
        .collect();

    VisibleSlice {
        start_ms,
        end_ms,
        samples,
    }
}
