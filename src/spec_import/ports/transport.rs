//! Outbound transport port for out-of-band detection.

use super::SpecImportResult;
use crate::spec_import::domain::DetectionRequest;
use async_trait::async_trait;

/// Sends detection requests to a worker that replies later on a separate
/// path.
#[async_trait]
pub trait DetectionRequestSink: Send + Sync {
    /// Hands `request` to the transport.
    ///
    /// Returning `Ok` only means the request was accepted for delivery.
    async fn send(&self, request: DetectionRequest) -> SpecImportResult<()>;
}
