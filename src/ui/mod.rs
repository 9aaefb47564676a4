//! UI rendering modules for the viewer.
//!
//! - `controls` - Point and window selectors
//! - `chart` - DBZ chart drawing with egui_plot
//! - `status` - Status line and view/count indicators

pub mod chart;
pub mod controls;
pub mod status;
