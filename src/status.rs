//! Status line text and date/time formatting.
//!
//! Status messages are derived from the current selection and visible slice
//! every time the view is refreshed; nothing here is stored.

use chrono::{DateTime, Local, TimeZone};

use crate::client::ClientError;
use crate::state::{StatusKind, WindowHours};
use crate::window::VisibleSlice;

/// Placeholder for an instant that cannot be represented
pub const INVALID_TIME: &str = "—";

/// A message for the status line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn loading_points() -> Self {
        Self::info("Loading points…")
    }

    pub fn loading_series(point: &str) -> Self {
        Self::info(format!("Loading {}…", point))
    }

    pub fn load_failed(point: &str, error: &ClientError) -> Self {
        Self::error(format!("Failed to load {}. {}", point, error))
    }

    /// Status for a freshly rendered slice
    pub fn for_slice(point: &str, window: WindowHours, slice: &VisibleSlice) -> Self {
        Self::for_slice_in(point, window, slice, &Local)
    }

    /// Status for a freshly rendered slice, formatting times in `tz`
    pub fn for_slice_in<Tz: TimeZone>(
        point: &str,
        window: WindowHours,
        slice: &VisibleSlice,
        tz: &Tz,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        if slice.is_empty() {
            Self::error(format!(
                "No data available for {} in the selected window ({}).",
                point,
                window.label().to_lowercase()
            ))
        } else if !slice.has_positive_measurement() {
            Self::info(format!(
                "No Precipitation above 0 for {} in the selected time range.",
                point
            ))
        } else {
            Self::info(format!(
                "Showing {} • {} data pts • {} → {}",
                point,
                slice.len(),
                format_timestamp_in(slice.start_ms, tz),
                format_timestamp_in(slice.end_ms, tz)
            ))
        }
    }
}

/// Format epoch milliseconds as a local date and time (`1/2/2024, 3:04:05 PM`)
pub fn format_timestamp(ms: i64) -> String {
    format_timestamp_in(ms, &Local)
}

/// Format epoch milliseconds in the given time zone
pub fn format_timestamp_in<Tz: TimeZone>(ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => INVALID_TIME.to_string(),
    }
}

/// Compact axis label (`1/2 3:04 PM`)
pub fn format_axis_time(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.with_timezone(&Local).format("%-m/%-d %-I:%M %p").to_string(),
        None => String::new(),
    }
}
