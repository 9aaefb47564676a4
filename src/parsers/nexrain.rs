//! Normalization of NEXRAIN series records.
//!
//! Turns raw records into [`Sample`]s. Records whose timestamp cannot be
//! parsed are dropped; the measurement is coerced leniently so a malformed
//! value becomes NaN instead of removing the record.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde_json::Value;

use super::types::{Normalizer, RawPayload, RawRecord, Sample};

/// Naive date-time layouts, interpreted in the local time zone
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Layouts carrying an explicit numeric offset without a colon (`+0000`)
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Normalizer for the `recent` endpoint payload
#[derive(Clone, Copy, Debug, Default)]
pub struct Nexrain;

impl Normalizer for Nexrain {
    fn normalize(&self, payload: &RawPayload) -> Vec<Sample> {
        let samples: Vec<Sample> = payload.items.iter().filter_map(normalize_record).collect();

        let dropped = payload.items.len() - samples.len();
        if dropped > 0 || payload.skipped > 0 {
            tracing::debug!(
                "Dropped {} records with unparseable timestamps and {} malformed entries",
                dropped,
                payload.skipped
            );
        }

        samples
    }
}

/// Normalize a payload with the default normalizer
pub fn normalize(payload: &RawPayload) -> Vec<Sample> {
    Nexrain.normalize(payload)
}

/// Normalize a single record, or `None` when it has no usable timestamp
pub fn normalize_record(record: &RawRecord) -> Option<Sample> {
    let raw_time = record
        .dt_iso
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(record.dt.as_deref())?;
    let time_ms = parse_timestamp(raw_time)?;

    Some(Sample {
        time_ms,
        value: record.dbz.as_ref().map(coerce_measurement),
        description: record.descript.clone().unwrap_or_default(),
    })
}

/// Parse a timestamp into epoch milliseconds.
///
/// Accepts RFC 3339 (with `Z` or an offset), naive ISO forms in local time,
/// a bare `YYYY-MM-DD` date at UTC midnight and the service's
/// `MM/DD/YYYY hh:mm:ss AM` form in local time.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.timestamp_millis());
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(local_millis(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Resolve a naive local time. Ambiguous times take the earlier instant;
/// times skipped by a DST transition use the offset in effect at that moment.
fn local_millis(naive: &NaiveDateTime) -> i64 {
    match Local.from_local_datetime(naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => {
            let offset = Local.offset_from_utc_datetime(naive);
            let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            (*naive - shift).and_utc().timestamp_millis()
        }
    }
}

/// Coerce a non-null measurement to a number using JavaScript `Number()`
/// rules: booleans are 1/0, strings are trimmed with empty meaning 0, and
/// anything unparseable becomes NaN.
pub fn coerce_measurement(raw: &Value) -> f64 {
    match raw {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        // Arrays convert through their joined string form
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [Value::Null] => 0.0,
            [Value::Bool(_)] | [Value::Object(_)] => f64::NAN,
            [single] => coerce_measurement(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn coerce_str(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts "inf" and "nan" spellings that JavaScript rejects
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}
