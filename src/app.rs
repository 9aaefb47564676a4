//! Main application state and eframe::App implementation.
//!
//! Network calls run on background threads and report back over a channel
//! that is drained at the start of every frame. All state changes go through
//! the [`Session`] state machine.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::client::NexrainSource;
use crate::controller::{fetch_series, Phase, SeriesRequest, SeriesResponse, Session};
use crate::params::LaunchParams;
use crate::state::WindowHours;

/// Result from a background load
pub enum LoadResult {
    Points(Vec<String>),
    Series(SeriesResponse),
}

/// Main application state
pub struct NexrainApp {
    /// Where points and series come from
    source: Arc<dyn NexrainSource>,
    /// Requested point and window from the command line
    params: LaunchParams,
    /// Selection, loaded series and chart
    pub(crate) session: Session,
    /// Sender cloned into every background thread
    load_sender: Sender<LoadResult>,
    /// Channel for receiving finished loads
    load_receiver: Receiver<LoadResult>,
    /// Number of background loads that have not reported back
    in_flight: usize,
}

impl NexrainApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        source: Arc<dyn NexrainSource>,
        params: LaunchParams,
        window: WindowHours,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_source(source, params, window)
    }

    /// Create the app and start loading the point list. No UI context is
    /// needed, so the load cycle can be driven with [`NexrainApp::poll`].
    pub fn with_source(
        source: Arc<dyn NexrainSource>,
        params: LaunchParams,
        window: WindowHours,
    ) -> Self {
        let (load_sender, load_receiver) = channel();
        let mut app = Self {
            source,
            params,
            session: Session::new(window),
            load_sender,
            load_receiver,
            in_flight: 0,
        };
        app.start_loading_points();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether any background load is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    // ========================================================================
    // Background loading
    // ========================================================================

    fn start_loading_points(&mut self) {
        self.session.begin_loading_points();

        let source = Arc::clone(&self.source);
        let sender = self.load_sender.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let points = source.list_points();
            let _ = sender.send(LoadResult::Points(points));
        });
    }

    fn start_loading_series(&mut self, request: SeriesRequest) {
        let source = Arc::clone(&self.source);
        let sender = self.load_sender.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let response = fetch_series(source.as_ref(), &request);
            let _ = sender.send(LoadResult::Series(response));
        });
    }

    /// Apply every finished background load
    pub fn poll(&mut self) {
        while let Ok(result) = self.load_receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            match result {
                LoadResult::Points(points) => {
                    let request = self.session.apply_points(points, &self.params);
                    self.start_loading_series(request);
                }
                LoadResult::Series(response) => {
                    self.session.apply_series(response);
                }
            }
        }
    }

    // ========================================================================
    // User input
    // ========================================================================

    /// Switch to another point and fetch its series
    pub fn select_point(&mut self, point: &str) {
        if !self.session.phase().accepts_selection() {
            return;
        }
        if self.session.selected_point() == Some(point) && self.session.phase() != Phase::Error
        {
            return;
        }
        let request = self.session.select_point(point);
        self.start_loading_series(request);
    }

    /// Change the trailing window; the loaded series is re-filtered in place
    pub fn set_window(&mut self, window: WindowHours) {
        if self.session.window() != window {
            self.session.set_window(window);
        }
    }
}

impl eframe::App for NexrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.poll();

        // Request repaint while loading so results are picked up
        if self.is_loading() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_controls(ui);
                ui.add_space(6.0);
            });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_status(ui);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });
    }
}
