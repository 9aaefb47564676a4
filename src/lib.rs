//! NEXRAIN Viewer - radar reflectivity (DBZ) time series by point
//!
//! This library fetches recent NEXRAIN records for a named point, normalizes
//! them into a time-ordered series, filters it by a trailing time window and
//! draws the result with egui.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`chart`] - Chart model and tooltip formatting
//! - [`client`] - HTTP client for the reporting service
//! - [`controller`] - Session state machine driving the load cycle
//! - [`params`] - Command-line and query-string launch parameters
//! - [`parsers`] - Record normalization and timestamp parsing
//! - [`settings`] - User settings file
//! - [`state`] - Core constants and the time window options
//! - [`status`] - Status messages and date formatting
//! - [`store`] - Active series and its time bounds
//! - [`window`] - Trailing window filter
//! - [`ui`] - User interface components
//!   - `controls` - Point and window selectors
//!   - `chart` - Chart drawing
//!   - `status` - Status line

pub mod app;
pub mod chart;
pub mod client;
pub mod controller;
pub mod params;
pub mod parsers;
pub mod settings;
pub mod state;
pub mod status;
pub mod store;
pub mod ui;
pub mod window;
