//! Core application state types and constants.
//!
//! This module contains the fundamental constants and small shared types used
//! throughout the application: service endpoints, chart axis ranges, the
//! selectable time windows and status styling.

use strum::{AsRefStr, EnumIter, EnumString};

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the NEXRAIN reporting service
pub const DEFAULT_BASE_URL: &str = "https://rainreport-971121604103.us-east5.run.app";

/// Maximum number of records requested per point
pub const SERIES_LIMIT: usize = 10_000;

/// Placeholder point used when the point list is unavailable or empty
pub const FALLBACK_POINT: &str = "";

/// Milliseconds per hour
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Span of the trailing window used as bounds for an empty series (7 days)
pub const EMPTY_SERIES_SPAN_MS: i64 = 7 * 24 * MS_PER_HOUR;

/// Fixed vertical axis range for reflectivity (dBZ)
pub const Y_AXIS_MIN: f64 = 0.0;
pub const Y_AXIS_MAX: f64 = 60.0;

/// Spacing between vertical axis ticks
pub const Y_AXIS_STEP: f64 = 10.0;

/// Color of the DBZ line (blue)
pub const CHART_LINE_COLOR: [u8; 3] = [71, 108, 155];

/// Returns the fallback point list shown when no points could be loaded
pub fn fallback_points() -> Vec<String> {
    vec![FALLBACK_POINT.to_string()]
}

/// Current wall-clock time as epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ============================================================================
// Window Selection
// ============================================================================

/// Trailing time window applied to the loaded series.
///
/// The string form of each variant is the exact value accepted from launch
/// parameters and settings; anything else is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, EnumString, AsRefStr, EnumIter)]
pub enum WindowHours {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "6")]
    Six,
    #[strum(serialize = "12")]
    Twelve,
    #[default]
    #[strum(serialize = "24")]
    Day,
    #[strum(serialize = "48")]
    TwoDays,
    #[strum(serialize = "72")]
    ThreeDays,
    #[strum(serialize = "168")]
    Week,
}

impl WindowHours {
    /// Window length in hours
    pub fn hours(&self) -> i64 {
        match self {
            WindowHours::One => 1,
            WindowHours::Three => 3,
            WindowHours::Six => 6,
            WindowHours::Twelve => 12,
            WindowHours::Day => 24,
            WindowHours::TwoDays => 48,
            WindowHours::ThreeDays => 72,
            WindowHours::Week => 168,
        }
    }

    /// Window length in milliseconds
    pub fn millis(&self) -> i64 {
        self.hours() * MS_PER_HOUR
    }

    /// Get the display name for this window
    pub fn label(&self) -> &'static str {
        match self {
            WindowHours::One => "Last hour",
            WindowHours::Three => "Last 3 hours",
            WindowHours::Six => "Last 6 hours",
            WindowHours::Twelve => "Last 12 hours",
            WindowHours::Day => "Last 24 hours",
            WindowHours::TwoDays => "Last 2 days",
            WindowHours::ThreeDays => "Last 3 days",
            WindowHours::Week => "Last 7 days",
        }
    }

    /// Parse a raw parameter value. Surrounding whitespace is ignored, the
    /// rest must equal one of the option values verbatim.
    pub fn from_param(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

// ============================================================================
// Status Styling
// ============================================================================

/// Type of status message (determines color)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational message (neutral)
    #[default]
    Info,
    /// Error message (red)
    Error,
}

impl StatusKind {
    /// Get the background color for this status type
    pub fn color(&self) -> [u8; 3] {
        match self {
            StatusKind::Info => [45, 45, 45],
            StatusKind::Error => [135, 30, 28],
        }
    }

    /// Get the text color for this status type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            StatusKind::Info => [220, 220, 220],
            StatusKind::Error => [255, 255, 255],
        }
    }
}
