//! Tests for background loading in the application
//!
//! Tests cover:
//! - Full startup cycle on background threads
//! - Point changes overtaking slow responses
//! - Window changes without network calls

use std::sync::Arc;
use std::time::Duration;

use nexrain_viewer::app::NexrainApp;
use nexrain_viewer::controller::Phase;
use nexrain_viewer::params::LaunchParams;
use nexrain_viewer::state::WindowHours;

use crate::common::{fixtures, wait_until, MockSource};

fn settled(app: &NexrainApp) -> bool {
    !app.is_loading()
        && matches!(
            app.session().phase(),
            Phase::SeriesDisplayed | Phase::Error
        )
}

#[test]
fn test_startup_loads_first_point() {
    let source = Arc::new(
        MockSource::new(&["Ridge", "Lakeside"]).with_series("Ridge", fixtures::TWO_RECORDS),
    );
    let mut app = NexrainApp::with_source(
        source.clone(),
        LaunchParams::default(),
        WindowHours::Day,
    );

    assert!(wait_until(&mut app, settled));
    assert_eq!(app.session().phase(), Phase::SeriesDisplayed);
    assert_eq!(app.session().selected_point(), Some("Ridge"));
    assert!(app.session().status().message.contains("2 data pts"));
    assert_eq!(source.requested(), vec!["Ridge".to_string()]);
}

#[test]
fn test_startup_with_failing_point_list() {
    // An empty list is what the client reports after a failed fetch
    let source = Arc::new(MockSource::new(&[]));
    let mut app = NexrainApp::with_source(source.clone(), LaunchParams::default(), WindowHours::Day);

    assert!(wait_until(&mut app, settled));
    assert_eq!(app.session().points(), &[String::new()]);
    assert_eq!(source.requested(), vec![String::new()]);
    assert_eq!(app.session().phase(), Phase::Error);
}

#[test]
fn test_fast_selection_overtakes_slow_one() {
    let source = Arc::new(
        MockSource::new(&["Slow", "Fast"])
            .with_series("Slow", fixtures::TWO_RECORDS)
            .with_series("Fast", fixtures::ALL_NULL)
            .with_delay("Slow", Duration::from_millis(300)),
    );
    let params = LaunchParams::from_query("point=slow");
    let mut app = NexrainApp::with_source(source.clone(), params, WindowHours::Day);

    // Wait for the startup request for the slow point to go out
    assert!(wait_until(&mut app, |app| app.session().phase() == Phase::LoadingSeries));
    app.select_point("Fast");

    assert!(wait_until(&mut app, settled));
    assert_eq!(app.session().selected_point(), Some("Fast"));
    assert_eq!(app.session().store().len(), 3);
    assert!(app
        .session()
        .status()
        .message
        .contains("No Precipitation"));
}

#[test]
fn test_window_change_after_load() {
    let source = Arc::new(MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::MIXED));
    let mut app = NexrainApp::with_source(source.clone(), LaunchParams::default(), WindowHours::Day);
    assert!(wait_until(&mut app, settled));

    app.set_window(WindowHours::Week);
    assert!(!app.is_loading());
    assert_eq!(app.session().chart().unwrap().points().len(), 3);
    assert_eq!(source.requested().len(), 1);
}

#[test]
fn test_reselecting_current_point_is_ignored() {
    let source = Arc::new(MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::TWO_RECORDS));
    let mut app = NexrainApp::with_source(source.clone(), LaunchParams::default(), WindowHours::Day);
    assert!(wait_until(&mut app, settled));

    app.select_point("Ridge");
    assert!(!app.is_loading());
    assert_eq!(source.requested().len(), 1);
}
