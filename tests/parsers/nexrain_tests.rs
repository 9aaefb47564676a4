//! Tests for NEXRAIN payload normalization
//!
//! Tests cover:
//! - Decoding payloads with missing or malformed items
//! - Timestamp fallbacks and dropped records
//! - Sorting and bounds in the series store

use nexrain_viewer::parsers::{normalize, Nexrain, Normalizer, RawPayload};
use nexrain_viewer::state::EMPTY_SERIES_SPAN_MS;
use nexrain_viewer::store::SeriesStore;

use crate::common::fixtures;

// ============================================
// Payload Decoding Tests
// ============================================

#[test]
fn test_payload_without_items_is_empty() {
    let payload = RawPayload::from_json(r#"{"count": 0}"#).unwrap();
    assert!(payload.is_empty());

    let payload = RawPayload::from_json(r#"{"items": "nope"}"#).unwrap();
    assert!(payload.is_empty());
}

#[test]
fn test_payload_skips_non_object_items() {
    let payload =
        RawPayload::from_json(r#"{"items": [1, "two", {"DT_ISO": "2024-01-01"}]}"#).unwrap();
    assert_eq!(payload.len(), 1);
    assert_eq!(payload.skipped, 2);
}

#[test]
fn test_payload_invalid_json() {
    assert!(RawPayload::from_json("<html>").is_err());
}

// ============================================
// Normalization Tests
// ============================================

#[test]
fn test_normalize_two_records() {
    let payload = RawPayload::from_json(fixtures::TWO_RECORDS).unwrap();
    let samples = normalize(&payload);

    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].time_ms, 1_704_067_200_000);
    assert_eq!(samples[0].value, Some(0.0));
    assert_eq!(samples[0].description, "clear");
    assert_eq!(samples[1].value, Some(25.0));
    assert!(samples.iter().any(|s| s.has_positive_value()));
}

#[test]
fn test_normalize_mixed_payload() {
    let payload = RawPayload::from_json(fixtures::MIXED).unwrap();
    let samples = Nexrain.normalize(&payload);

    // Records with no usable timestamp are dropped
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].value, Some(17.5));
    assert_eq!(samples[0].description, "drizzle");
    assert_eq!(samples[1].value, Some(5.0));
    assert_eq!(samples[1].description, "");
}

#[test]
fn test_normalize_null_measurements() {
    let payload = RawPayload::from_json(fixtures::ALL_NULL).unwrap();
    let samples = normalize(&payload);

    assert_eq!(samples.len(), 3);
    assert!(samples.iter().all(|s| s.value.is_none()));
    assert!(!samples.iter().any(|s| s.has_positive_value()));
}

// ============================================
// Series Store Tests
// ============================================

#[test]
fn test_store_sorts_normalized_series() {
    let payload = RawPayload::from_json(fixtures::MIXED).unwrap();
    let mut store = SeriesStore::new();
    store.replace(normalize(&payload));

    let times: Vec<i64> = store.all().iter().map(|s| s.time_ms).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);

    let bounds = store.bounds();
    assert_eq!(bounds.min_ms, 1_704_067_200_000);
    assert_eq!(bounds.max_ms, 1_704_175_200_000);
}

#[test]
fn test_store_empty_series_bounds() {
    let mut store = SeriesStore::new();
    store.replace_at(Vec::new(), 1_000_000_000_000);

    assert!(store.is_empty());
    assert_eq!(store.bounds().max_ms, 1_000_000_000_000);
    assert_eq!(store.bounds().span_ms(), EMPTY_SERIES_SPAN_MS);
}
