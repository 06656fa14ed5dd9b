//! Wire payload for sending the selected intervals to the backend.
//!
//! Each interval is flattened to hour granularity (`"Mon, 09"`); minutes are
//! dropped. The whole set goes out as one `{"events": [...]}` body.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::instant::wire_label;
use crate::interval::{Interval, IntervalId};

/// Endpoint the picker posts to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/sentTimes";

/// An interval as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEvent {
    pub id: IntervalId,
    pub start: String,
    pub end: String,
}

impl From<&Interval> for WireEvent {
    fn from(iv: &Interval) -> Self {
        Self {
            id: iv.id,
            start: wire_label(&iv.start),
            end: wire_label(&iv.end),
        }
    }
}

/// Request body of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub events: Vec<WireEvent>,
}

impl SubmissionPayload {
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        Self {
            events: intervals.iter().map(WireEvent::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Where and how submissions are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    pub endpoint: String,
    /// Request timeout in seconds. `None` waits for as long as the transport
    /// allows.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Delivers a payload to the backend and returns the response body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_events(&self, payload: &SubmissionPayload) -> Result<String>;
}
