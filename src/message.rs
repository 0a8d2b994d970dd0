//! Wire model shared by both directions of the bridge.
//!
//! Every message travels as `(channel, type, id?, args...)`. The channel tag
//! is fixed; the control service and the front-end agree on it out of band.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single logical channel this bridge multiplexes over the transport.
pub const CHANNEL_TAG: &str = "MPRIS:IPC";

/// MPRIS metadata time unit: 1 second = 1,000,000 units (microseconds).
pub const US_PER_SEC: f64 = 1_000_000.0;

/// One command or event. Outbound commands carry no `id`; inbound events
/// carry a caller-supplied `id` the bridge treats as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Message {
    /// An outbound command message.
    #[must_use]
    pub fn command(kind: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            args,
        }
    }

    /// An inbound event message with a correlation id.
    #[must_use]
    pub fn event(kind: impl Into<String>, id: i64, args: Vec<Value>) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id),
            args,
        }
    }
}

/// A message tagged with the channel it belongs to, as the transport sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub channel: String,
    pub message: Message,
}

/// Rescale a native media position (seconds) to metadata time units.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn secs_to_us(secs: f64) -> i64 {
    (secs * US_PER_SEC).round() as i64
}

/// Rescale a metadata-unit position back to native seconds.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn us_to_secs(us: i64) -> f64 {
    us as f64 / US_PER_SEC
}
