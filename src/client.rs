//! HTTP client for the NEXRAIN reporting service.
//!
//! Two read-only endpoints are used: the point list and the recent series of
//! a single point. Calls are blocking - run them on a background thread.

use serde_json::Value;
use thiserror::Error;

use crate::parsers::RawPayload;
use crate::state::{fallback_points, SERIES_LIMIT};

/// User agent for API requests
const USER_AGENT: &str = concat!("nexrain-viewer/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when talking to the service
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx answer or network failure. Network failures carry no status.
    #[error("HTTP {code}: {body}", code = .status.unwrap_or(0))]
    Transport { status: Option<u16>, body: String },

    /// A 2xx answer whose body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

// ============================================================================
// Data Source
// ============================================================================

/// Source of points and series data
pub trait NexrainSource: Send + Sync {
    /// List the available points. Never fails: any failure or an empty list
    /// yields the single placeholder point.
    fn list_points(&self) -> Vec<String>;

    /// Fetch the recent records of one point
    fn fetch_series(&self, point: &str) -> Result<RawPayload, ClientError>;
}

/// Extract the point list from a decoded response body, falling back to the
/// placeholder when the list is missing or empty
pub fn points_from_body(body: &Value) -> Vec<String> {
    let points: Vec<String> = body
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if points.is_empty() {
        fallback_points()
    } else {
        points
    }
}

// ============================================================================
// HTTP Implementation
// ============================================================================

/// `ureq` backed client
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Non-2xx answers are handled here so their body can be reported
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();

        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn points_url(&self) -> String {
        format!("{}/v1/nexrain/waterfallpoints", self.base_url)
    }

    /// Series URL with the point percent-encoded
    pub fn series_url(&self, point: &str) -> String {
        format!(
            "{}/v1/nexrain/recent?point={}&limit={}",
            self.base_url,
            urlencoding::encode(point),
            SERIES_LIMIT
        )
    }

    fn get_json(&self, url: &str) -> Result<Value, ClientError> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Cache-Control", "no-cache")
            .call()
            .map_err(|e| ClientError::Transport {
                status: None,
                body: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(ClientError::Transport {
                status: Some(status.as_u16()),
                body,
            });
        }

        response
            .body_mut()
            .read_json::<Value>()
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

impl NexrainSource for HttpClient {
    fn list_points(&self) -> Vec<String> {
        match self.get_json(&self.points_url()) {
            Ok(body) => {
                let points = points_from_body(&body);
                tracing::info!("Loaded {} points", points.len());
                points
            }
            Err(e) => {
                tracing::warn!("Failed to load point list, using placeholder: {}", e);
                fallback_points()
            }
        }
    }

    fn fetch_series(&self, point: &str) -> Result<RawPayload, ClientError> {
        let body = self.get_json(&self.series_url(point))?;
        let payload = RawPayload::from_value(body);
        tracing::info!("Fetched {} records for {:?}", payload.len(), point);
        Ok(payload)
    }
}
