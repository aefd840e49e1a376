//! Inbound side of out-of-band detection.

use crate::correlation::CorrelationRegistry;
use crate::spec_import::domain::DetectionReply;

/// Delivers detection replies to the detector waiting for them.
#[derive(Debug, Clone)]
pub struct DetectionReplyRouter {
    registry: CorrelationRegistry<DetectionReply>,
}

impl DetectionReplyRouter {
    /// Creates a router over the registry shared with the detector.
    #[must_use]
    pub const fn new(registry: CorrelationRegistry<DetectionReply>) -> Self {
        Self { registry }
    }

    /// Routes `reply` to its waiter.
    ///
    /// Returns `false` for late, duplicate or unknown replies; those are
    /// dropped.
    pub fn route(&self, reply: DetectionReply) -> bool {
        let correlation_id = reply.correlation_id().clone();
        self.registry.deliver(&correlation_id, reply)
    }
}
