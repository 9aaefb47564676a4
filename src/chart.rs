//! Chart model and tooltip formatting.
//!
//! [`ChartModel`] is the data behind the DBZ plot. It is created once, on the
//! first successful load, and updated in place afterwards. The egui drawing
//! code lives in [`crate::ui::chart`].

use crate::status::format_timestamp;
use crate::window::VisibleSlice;

/// A plotted reading with its tooltip description
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Epoch milliseconds
    pub x: f64,
    /// dBZ, `None` for a gap
    pub y: Option<f64>,
    pub description: String,
}

impl ChartPoint {
    /// Whether this point is drawn (gaps and NaN are skipped by the line)
    #[inline]
    pub fn is_drawable(&self) -> bool {
        matches!(self.y, Some(y) if y.is_finite())
    }

    /// Tooltip text: formatted time on the first line, label on the second
    pub fn tooltip(&self) -> String {
        let title = tooltip_title(self.x);
        let label = tooltip_label(&self.description, self.y);
        match (title.is_empty(), label.is_empty()) {
            (true, _) => label,
            (false, true) => title,
            (false, false) => format!("{}\n{}", title, label),
        }
    }
}

/// Data and horizontal bounds of the DBZ chart
#[derive(Clone, Debug, Default)]
pub struct ChartModel {
    points: Vec<ChartPoint>,
    x_bounds: (f64, f64),
    revision: u64,
}

impl ChartModel {
    pub fn new() -> Self {
        tracing::info!("Building DBZ chart");
        Self::default()
    }

    /// Replace the plotted data with `slice` and pin the horizontal axis to
    /// the slice's window. The next frame draws it without animation.
    pub fn render(&mut self, slice: &VisibleSlice) {
        self.points = slice
            .samples
            .iter()
            .map(|s| ChartPoint {
                x: s.time_ms as f64,
                y: s.value,
                description: s.description.clone(),
            })
            .collect();
        self.x_bounds = (slice.start_ms as f64, slice.end_ms as f64);
        self.revision += 1;
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Horizontal axis range `(start, end)` in epoch milliseconds
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_bounds
    }

    /// Number of times the chart has been updated
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Line vertices; gaps are skipped so the line spans them
    pub fn line_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter_map(|p| match p.y {
                Some(y) if y.is_finite() => Some([p.x, y]),
                _ => None,
            })
            .collect()
    }

    /// The drawable point closest in time to `x`
    pub fn nearest(&self, x: f64) -> Option<&ChartPoint> {
        self.points
            .iter()
            .filter(|p| p.is_drawable())
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }
}

/// Tooltip title: the hovered time, or empty for a zero x value
pub fn tooltip_title(x_ms: f64) -> String {
    if x_ms == 0.0 || !x_ms.is_finite() {
        return String::new();
    }
    format_timestamp(x_ms as i64)
}

/// Tooltip label: `"<description> (<value> dBZ)"`, or whichever part is present
pub fn tooltip_label(description: &str, value: Option<f64>) -> String {
    match (description.is_empty(), value) {
        (false, Some(v)) => format!("{} ({} dBZ)", description, format_value(v)),
        (false, None) => description.to_string(),
        (true, Some(v)) => format!("{} dBZ", format_value(v)),
        (true, None) => String::new(),
    }
}

/// Shortest decimal form of a reading (`25`, `17.5`, `NaN`, `Infinity`)
pub fn format_value(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{}", value)
    }
}
