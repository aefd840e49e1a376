//! Configuration for out-of-band detection.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time to wait for a detection reply.
const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`super::CorrelatedSpecDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// How long to wait for a reply before abandoning the request.
    #[serde(rename = "reply_timeout_ms", with = "duration_ms")]
    pub reply_timeout: Duration,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }
}

impl DetectionConfig {
    /// Creates a configuration with the given reply timeout.
    #[must_use]
    pub const fn with_reply_timeout(reply_timeout: Duration) -> Self {
        Self { reply_timeout }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
