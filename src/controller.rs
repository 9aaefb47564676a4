//! Viewer session and its state machine.
//!
//! [`Session`] owns everything the viewer knows: the point list, the current
//! selection, the series store and the chart. It is driven by explicit
//! events (points loaded, point selected, series loaded, window changed) so
//! the whole fetch → normalize → filter → render pipeline can run without a
//! UI. The egui layer in [`crate::app`] only translates user input and
//! background-thread results into these calls.

use crate::chart::ChartModel;
use crate::client::{ClientError, NexrainSource};
use crate::params::LaunchParams;
use crate::parsers::{normalize, RawPayload};
use crate::state::{fallback_points, WindowHours};
use crate::status::Status;
use crate::store::SeriesStore;
use crate::window;

/// Where the session is in its load cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the point list
    LoadingPoints,
    /// Points available, no series requested
    PointsLoaded,
    /// Waiting for the series of the selected point
    LoadingSeries,
    /// A series is loaded and rendered
    SeriesDisplayed,
    /// The last series fetch failed; selecting a point retries
    Error,
}

impl Phase {
    /// Whether a network call is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::LoadingPoints | Phase::LoadingSeries)
    }

    /// Whether the user can pick a point
    pub fn accepts_selection(&self) -> bool {
        !matches!(self, Phase::Idle | Phase::LoadingPoints)
    }
}

/// A series fetch to run for the given selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesRequest {
    /// Selection counter at the time of the request
    pub generation: u64,
    pub point: String,
}

/// Outcome of a [`SeriesRequest`]
#[derive(Clone, Debug)]
pub struct SeriesResponse {
    pub generation: u64,
    pub point: String,
    pub result: Result<RawPayload, ClientError>,
}

/// Run a series request against a source. Blocking.
pub fn fetch_series(source: &dyn NexrainSource, request: &SeriesRequest) -> SeriesResponse {
    SeriesResponse {
        generation: request.generation,
        point: request.point.clone(),
        result: source.fetch_series(&request.point),
    }
}

/// State of one viewer window
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    points: Vec<String>,
    selected_point: Option<String>,
    window: WindowHours,
    store: SeriesStore,
    chart: Option<ChartModel>,
    status: Status,
    generation: u64,
}

impl Session {
    pub fn new(window: WindowHours) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Start of initialization: the point list has been requested
    pub fn begin_loading_points(&mut self) {
        self.phase = Phase::LoadingPoints;
        self.status = Status::loading_points();
    }

    /// Populate the point list and pick the initial selection.
    ///
    /// The window parameter is applied only when it matches an option. The
    /// requested point is matched case-insensitively, otherwise the first
    /// point is selected. Returns the series request for that point.
    pub fn apply_points(&mut self, points: Vec<String>, params: &LaunchParams) -> SeriesRequest {
        self.points = if points.is_empty() {
            fallback_points()
        } else {
            points
        };
        self.phase = Phase::PointsLoaded;
        tracing::info!("Point selector populated with {} points", self.points.len());

        if let Some(window) = params.window() {
            self.window = window;
        } else if let Some(hours) = &params.hours {
            tracing::warn!("Ignoring unsupported window parameter {:?}", hours);
        }

        let initial = match params.match_point(&self.points) {
            Some(point) => point.clone(),
            None => {
                if let Some(wanted) = &params.point {
                    tracing::warn!("Requested point {:?} not found, using first point", wanted);
                }
                self.points[0].clone()
            }
        };

        self.select_point(initial)
    }

    /// Select a point and return the series request for it.
    ///
    /// Every selection supersedes earlier ones: responses to older requests
    /// are discarded by [`Session::apply_series`].
    pub fn select_point(&mut self, point: impl Into<String>) -> SeriesRequest {
        let point = point.into();
        self.generation += 1;
        self.phase = Phase::LoadingSeries;
        self.status = Status::loading_series(&point);
        self.selected_point = Some(point.clone());

        SeriesRequest {
            generation: self.generation,
            point,
        }
    }

    /// Apply a finished series fetch. Returns `false` when the response
    /// belongs to a superseded selection and was ignored.
    pub fn apply_series(&mut self, response: SeriesResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!(
                "Discarding stale series for {:?} (request {}, current {})",
                response.point,
                response.generation,
                self.generation
            );
            return false;
        }

        match response.result {
            Ok(payload) => {
                let samples = normalize(&payload);
                tracing::info!(
                    "Loaded {} samples for {:?} ({} records received)",
                    samples.len(),
                    response.point,
                    payload.len()
                );
                self.store.replace(samples);
                self.ensure_chart();
                self.refresh_view();
                self.phase = Phase::SeriesDisplayed;
            }
            Err(e) => {
                tracing::warn!("Failed to load {:?}: {}", response.point, e);
                self.status = Status::load_failed(&response.point, &e);
                self.phase = Phase::Error;
            }
        }
        true
    }

    /// Change the time window and re-render from the loaded series.
    /// No network call is made; before the first load only the selection is stored.
    pub fn set_window(&mut self, window: WindowHours) {
        self.window = window;
        if self.chart.is_some() {
            self.refresh_view();
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// The chart, created on first use and reused afterwards
    pub fn ensure_chart(&mut self) -> &mut ChartModel {
        self.chart.get_or_insert_with(ChartModel::new)
    }

    /// Filter the active series by the current window, render the chart and
    /// derive the status line
    fn refresh_view(&mut self) {
        let slice = window::apply(self.store.all(), self.store.bounds(), self.window);
        let point = self.selected_point.clone().unwrap_or_default();

        self.status = Status::for_slice(&point, self.window, &slice);
        if let Some(chart) = self.chart.as_mut() {
            chart.render(&slice);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn points(&self) -> &[String] {
        &self.points
    }

    pub fn selected_point(&self) -> Option<&str> {
        self.selected_point.as_deref()
    }

    pub fn window(&self) -> WindowHours {
        self.window
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn chart(&self) -> Option<&ChartModel> {
        self.chart.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
