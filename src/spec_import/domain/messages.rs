//! Messages exchanged with an out-of-band detection worker.

use super::{ProjectRef, SpecDocument};
use crate::correlation::CorrelationId;
use serde::{Deserialize, Serialize};

/// Request asking a detection worker to scan a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRequest {
    correlation_id: CorrelationId,
    project: ProjectRef,
}

impl DetectionRequest {
    /// Creates a detection request.
    #[must_use]
    pub const fn new(correlation_id: CorrelationId, project: ProjectRef) -> Self {
        Self {
            correlation_id,
            project,
        }
    }

    /// Returns the correlation identifier the reply must carry.
    #[must_use]
    pub const fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Returns the project to scan.
    #[must_use]
    pub const fn project(&self) -> &ProjectRef {
        &self.project
    }
}

/// Reply produced by a detection worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReply {
    correlation_id: CorrelationId,
    result: Result<Vec<SpecDocument>, String>,
}

impl DetectionReply {
    /// Creates a reply listing the documents found.
    #[must_use]
    pub const fn found(correlation_id: CorrelationId, documents: Vec<SpecDocument>) -> Self {
        Self {
            correlation_id,
            result: Ok(documents),
        }
    }

    /// Creates a reply reporting that detection failed.
    #[must_use]
    pub fn failed(correlation_id: CorrelationId, reason: impl Into<String>) -> Self {
        Self {
            correlation_id,
            result: Err(reason.into()),
        }
    }

    /// Returns the correlation identifier of the originating request.
    #[must_use]
    pub const fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Consumes the reply and returns the worker's result.
    ///
    /// # Errors
    ///
    /// Returns the worker's failure reason when detection failed.
    pub fn into_result(self) -> Result<Vec<SpecDocument>, String> {
        self.result
    }
}
