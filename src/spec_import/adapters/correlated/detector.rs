//! Outbound side of out-of-band detection.

use super::DetectionConfig;
use crate::correlation::{CorrelationId, CorrelationRegistry, ReplyOutcome};
use crate::spec_import::{
    domain::{DetectionReply, DetectionReport, DetectionRequest, ProjectRef},
    ports::{DetectionRequestSink, SpecDetector, SpecImportError, SpecImportResult},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// [`SpecDetector`] that delegates scanning to a remote worker.
///
/// Each call generates a fresh correlation ID, so concurrent detections for
/// the same project never share a slot.
pub struct CorrelatedSpecDetector<S>
where
    S: DetectionRequestSink,
{
    sink: Arc<S>,
    registry: CorrelationRegistry<DetectionReply>,
    config: DetectionConfig,
}

impl<S> CorrelatedSpecDetector<S>
where
    S: DetectionRequestSink,
{
    /// Creates a detector.
    ///
    /// `registry` must be the one the inbound
    /// [`super::DetectionReplyRouter`] delivers to.
    #[must_use]
    pub const fn new(
        sink: Arc<S>,
        registry: CorrelationRegistry<DetectionReply>,
        config: DetectionConfig,
    ) -> Self {
        Self {
            sink,
            registry,
            config,
        }
    }

    /// Returns the number of detections awaiting a reply.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.registry.len()
    }
}

#[async_trait]
impl<S> SpecDetector for CorrelatedSpecDetector<S>
where
    S: DetectionRequestSink,
{
    async fn detect(&self, project: &ProjectRef) -> SpecImportResult<DetectionReport> {
        let correlation_id = CorrelationId::generate();
        let pending = self.registry.register(correlation_id.clone())?;

        let request = DetectionRequest::new(correlation_id, project.clone());
        if let Err(err) = self.sink.send(request).await {
            warn!(project = %project, error = %err, "detection request could not be sent");
            drop(pending);
            return Err(err);
        }

        let timeout = self.config.reply_timeout;
        let reply = match pending.wait_timeout(timeout).await {
            ReplyOutcome::Delivered(reply) => reply,
            ReplyOutcome::TimedOut => {
                return Err(SpecImportError::DetectionTimedOut {
                    project: project.clone(),
                    timeout,
                });
            }
            ReplyOutcome::Canceled => {
                return Err(SpecImportError::DetectionCanceled(project.clone()));
            }
        };

        match reply.into_result() {
            Ok(documents) => {
                debug!(project = %project, found = documents.len(), "detection reply received");
                Ok(DetectionReport::new(project.clone(), documents))
            }
            Err(reason) => Err(SpecImportError::DetectionFailed {
                project: project.clone(),
                reason,
            }),
        }
    }
}
