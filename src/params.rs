//! Launch parameters: the requested point and time window.
//!
//! Parameters come from command-line flags or from a raw query string in the
//! `point=...&hours=...` form, so links built for the web page keep working.

use clap::Parser;

use crate::state::WindowHours;

/// Command-line interface
#[derive(Debug, Default, Parser)]
#[command(name = "nexrain-viewer", version, about = "View NEXRAIN radar reflectivity by point")]
pub struct Cli {
    /// Point to show on startup (case-insensitive)
    #[arg(long)]
    pub point: Option<String>,

    /// Initial time window in hours (1, 3, 6, 12, 24, 48, 72 or 168)
    #[arg(long, visible_alias = "window-hours")]
    pub hours: Option<String>,

    /// Override the service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Query string with `point`, `hours` or `windowHours` parameters
    #[arg(long)]
    pub query: Option<String>,
}

impl Cli {
    /// Resolve launch parameters. Explicit flags win over `--query` values.
    pub fn launch_params(&self) -> LaunchParams {
        let from_query = self
            .query
            .as_deref()
            .map(LaunchParams::from_query)
            .unwrap_or_default();

        LaunchParams {
            point: non_empty(self.point.clone()).or(from_query.point),
            hours: non_empty(self.hours.clone()).or(from_query.hours),
        }
    }
}

/// Requested point and window, both optional and unvalidated
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub point: Option<String>,
    pub hours: Option<String>,
}

impl LaunchParams {
    /// Parse a query string (a leading `?` is allowed). The first occurrence
    /// of each key wins; `hours` takes precedence over `windowHours`.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');

        let mut point = None;
        let mut hours = None;
        let mut window_hours = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match decode_component(key).as_str() {
                "point" => &mut point,
                "hours" => &mut hours,
                "windowHours" => &mut window_hours,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_component(value));
            }
        }

        Self {
            point: non_empty(point),
            hours: non_empty(hours).or(non_empty(window_hours)),
        }
    }

    /// The requested window, if it matches one of the options verbatim
    pub fn window(&self) -> Option<WindowHours> {
        self.hours.as_deref().and_then(WindowHours::from_param)
    }

    /// Find the requested point among `points`, ignoring case and
    /// surrounding whitespace
    pub fn match_point<'a>(&self, points: &'a [String]) -> Option<&'a String> {
        let wanted = self.point.as_deref()?.trim().to_lowercase();
        points.iter().find(|p| p.to_lowercase() == wanted)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Decode a form-encoded component (`+` is a space)
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
