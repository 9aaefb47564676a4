//! Tests for the session pipeline
//!
//! Tests cover:
//! - Initial selection from launch parameters
//! - Status messages for loaded series
//! - Fallback placeholder point
//! - Failures and stale responses
//! - Window changes without refetching

use nexrain_viewer::client::{ClientError, NexrainSource};
use nexrain_viewer::controller::{fetch_series, Phase, SeriesResponse, Session};
use nexrain_viewer::params::LaunchParams;
use nexrain_viewer::state::WindowHours;

use crate::common::{fixtures, MockSource};

/// Drive a session through initialization with `source`
fn initialize(source: &MockSource, params: &LaunchParams) -> Session {
    let mut session = Session::new(WindowHours::default());
    session.begin_loading_points();
    let request = session.apply_points(source.list_points(), params);
    let response = fetch_series(source, &request);
    session.apply_series(response);
    session
}

// ============================================
// Initialization Tests
// ============================================

#[test]
fn test_two_record_series_summary() {
    let source = MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::TWO_RECORDS);
    let session = initialize(&source, &LaunchParams::default());

    assert_eq!(session.phase(), Phase::SeriesDisplayed);
    assert_eq!(session.store().len(), 2);

    let chart = session.chart().expect("chart is built on first load");
    assert_eq!(chart.points().len(), 2);
    assert!(chart.points().iter().any(|p| p.y == Some(25.0)));

    let status = session.status();
    assert!(!status.is_error());
    assert!(status.message.starts_with("Showing Ridge"));
    assert!(status.message.contains("2 data pts"));
}

#[test]
fn test_all_null_series_reports_no_precipitation() {
    let source = MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::ALL_NULL);
    let session = initialize(&source, &LaunchParams::default());

    assert_eq!(session.store().len(), 3);
    assert_eq!(
        session.status().message,
        "No Precipitation above 0 for Ridge in the selected time range."
    );
}

#[test]
fn test_empty_point_list_uses_placeholder() {
    let source = MockSource::new(&[]).with_series("", fixtures::EMPTY);
    let session = initialize(&source, &LaunchParams::default());

    assert_eq!(session.points(), &[String::new()]);
    assert_eq!(session.selected_point(), Some(""));
    assert_eq!(source.requested(), vec![String::new()]);
    assert_eq!(session.phase(), Phase::SeriesDisplayed);
    assert!(session.status().is_error());
    assert!(session.status().message.starts_with("No data available"));
}

#[test]
fn test_requested_point_matched_case_insensitively() {
    let source = MockSource::new(&["North Ridge", "Lakeside"])
        .with_series("Lakeside", fixtures::TWO_RECORDS);
    let params = LaunchParams::from_query("point=%20LAKESIDE%20&hours=6");
    let session = initialize(&source, &params);

    assert_eq!(session.selected_point(), Some("Lakeside"));
    assert_eq!(session.window(), WindowHours::Six);
    assert_eq!(source.requested(), vec!["Lakeside".to_string()]);
}

#[test]
fn test_unknown_point_and_window_fall_back() {
    let source = MockSource::new(&["North Ridge", "Lakeside"])
        .with_series("North Ridge", fixtures::TWO_RECORDS);
    let params = LaunchParams::from_query("point=Nowhere&hours=5");
    let session = initialize(&source, &params);

    assert_eq!(session.selected_point(), Some("North Ridge"));
    assert_eq!(session.window(), WindowHours::Day);
}

// ============================================
// Failure Tests
// ============================================

#[test]
fn test_failed_series_shows_error_status() {
    let source = MockSource::new(&["Ridge"]).with_error(
        "Ridge",
        ClientError::Transport {
            status: Some(500),
            body: "internal error".to_string(),
        },
    );
    let session = initialize(&source, &LaunchParams::default());

    assert_eq!(session.phase(), Phase::Error);
    assert!(session.chart().is_none());
    assert!(session.status().is_error());
    assert_eq!(
        session.status().message,
        "Failed to load Ridge. HTTP 500: internal error"
    );
}

#[test]
fn test_failure_keeps_previous_series() {
    let source = MockSource::new(&["Ridge", "Broken"])
        .with_series("Ridge", fixtures::TWO_RECORDS)
        .with_error("Broken", ClientError::Parse("expected value".to_string()));
    let mut session = initialize(&source, &LaunchParams::default());

    let request = session.select_point("Broken");
    session.apply_series(fetch_series(&source, &request));

    assert_eq!(session.phase(), Phase::Error);
    assert_eq!(session.store().len(), 2);
    assert!(session.chart().is_some());
}

#[test]
fn test_superseded_response_is_ignored() {
    let source = MockSource::new(&["A", "B"])
        .with_series("A", fixtures::TWO_RECORDS)
        .with_series("B", fixtures::ALL_NULL);
    let mut session = initialize(&source, &LaunchParams::default());

    let slow = session.select_point("A");
    let fast = session.select_point("B");

    // B answers first, then the older A response arrives
    assert!(session.apply_series(fetch_series(&source, &fast)));
    assert!(!session.apply_series(fetch_series(&source, &slow)));

    assert_eq!(session.selected_point(), Some("B"));
    assert_eq!(session.store().len(), 3);
    assert!(session.status().message.contains("No Precipitation"));
}

#[test]
fn test_response_for_unknown_generation_is_ignored() {
    let mut session = Session::new(WindowHours::Day);
    let applied = session.apply_series(SeriesResponse {
        generation: 42,
        point: "Ghost".to_string(),
        result: Ok(Default::default()),
    });
    assert!(!applied);
    assert_eq!(session.phase(), Phase::Idle);
}

// ============================================
// Window Change Tests
// ============================================

#[test]
fn test_window_change_does_not_refetch() {
    let source = MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::MIXED);
    let mut session = initialize(&source, &LaunchParams::default());
    assert_eq!(source.requested().len(), 1);

    // 2024-01-02 06:00 is the newest record; 24h covers the two records on 1/2
    assert_eq!(session.chart().unwrap().points().len(), 2);

    session.set_window(WindowHours::TwoDays);
    assert_eq!(session.chart().unwrap().points().len(), 3);

    session.set_window(WindowHours::One);
    assert_eq!(session.chart().unwrap().points().len(), 1);
    assert!(session.status().message.contains("1 data pts"));

    assert_eq!(source.requested().len(), 1);
}

#[test]
fn test_window_bounds_follow_series_end() {
    let source = MockSource::new(&["Ridge"]).with_series("Ridge", fixtures::TWO_RECORDS);
    let mut session = initialize(&source, &LaunchParams::default());

    session.set_window(WindowHours::Week);
    let (start, end) = session.chart().unwrap().x_bounds();
    // Start is clamped to the first record
    assert_eq!(start, 1_704_067_200_000.0);
    assert_eq!(end, 1_704_070_800_000.0);
}
