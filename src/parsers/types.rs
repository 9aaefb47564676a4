use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single record as delivered by the `recent` endpoint.
///
/// Field types from the service are not trusted: timestamps and descriptions
/// that are not JSON strings are treated as absent, and the measurement is
/// kept as a raw JSON value for numeric coercion later.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    /// Preferred timestamp (ISO 8601)
    #[serde(rename = "DT_ISO", default, deserialize_with = "string_or_none")]
    pub dt_iso: Option<String>,
    /// Secondary timestamp (`MM/DD/YYYY hh:mm:ss AM`)
    #[serde(rename = "DT", default, deserialize_with = "string_or_none")]
    pub dt: Option<String>,
    /// Reflectivity reading; `None` when absent or JSON null
    #[serde(rename = "DBZ", default)]
    pub dbz: Option<Value>,
    /// Human readable description of the reading
    #[serde(rename = "DESCRIPT", default, deserialize_with = "string_or_none")]
    pub descript: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// The item list of a series response
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPayload {
    pub items: Vec<RawRecord>,
    /// Number of `items` entries that were not records at all
    pub skipped: usize,
}

impl RawPayload {
    /// Build a payload from a decoded response body.
    ///
    /// A missing or non-list `items` field yields an empty payload. Entries
    /// that are not JSON objects are skipped.
    pub fn from_value(body: Value) -> Self {
        let entries = match body {
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(entries)) => entries,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let mut payload = RawPayload::default();
        for entry in entries {
            if !entry.is_object() {
                payload.skipped += 1;
                continue;
            }
            match serde_json::from_value::<RawRecord>(entry) {
                Ok(record) => payload.items.push(record),
                Err(_) => payload.skipped += 1,
            }
        }
        payload
    }

    /// Parse a payload from a JSON response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(body).map(Self::from_value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A normalized reading: a valid instant, an optional value and a description
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Epoch milliseconds
    pub time_ms: i64,
    /// Reflectivity in dBZ. May be NaN when the service sent a non-numeric value.
    pub value: Option<f64>,
    pub description: String,
}

impl Sample {
    pub fn new(time_ms: i64, value: Option<f64>, description: impl Into<String>) -> Self {
        Self {
            time_ms,
            value,
            description: description.into(),
        }
    }

    /// True when the reading is a number strictly above zero
    #[inline]
    pub fn has_positive_value(&self) -> bool {
        matches!(self.value, Some(v) if v > 0.0)
    }
}

/// Converts a raw payload into samples. Records that cannot be normalized
/// are dropped, so this never fails.
pub trait Normalizer {
    fn normalize(&self, payload: &RawPayload) -> Vec<Sample>;
}
