//! Detection port and the error type shared by all specification ports.

use crate::correlation::RegistryError;
use crate::spec_import::domain::{DetectionReport, ProjectRef};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for specification port operations.
pub type SpecImportResult<T> = Result<T, SpecImportError>;

/// Looks for importable specifications belonging to a project.
#[async_trait]
pub trait SpecDetector: Send + Sync {
    /// Scans `project` and reports the documents found.
    ///
    /// An empty report is a successful detection that found nothing.
    async fn detect(&self, project: &ProjectRef) -> SpecImportResult<DetectionReport>;
}

/// Errors returned by detection, import and transport adapters.
#[derive(Debug, Clone, Error)]
pub enum SpecImportError {
    /// No detection reply arrived before the deadline.
    #[error("detection for project {project} timed out after {timeout:?}")]
    DetectionTimedOut {
        /// Project being scanned.
        project: ProjectRef,
        /// Deadline that elapsed.
        timeout: Duration,
    },

    /// The pending detection was released without a reply.
    #[error("detection for project {0} was canceled")]
    DetectionCanceled(ProjectRef),

    /// The detection worker reported a failure.
    #[error("detection for project {project} failed: {reason}")]
    DetectionFailed {
        /// Project being scanned.
        project: ProjectRef,
        /// Worker-supplied reason.
        reason: String,
    },

    /// The detection request could not be registered for a reply.
    #[error("could not register detection request: {0}")]
    Registration(#[from] RegistryError),

    /// The import step rejected the documents.
    #[error("import for project {project} failed: {reason}")]
    ImportFailed {
        /// Project being imported.
        project: ProjectRef,
        /// Importer-supplied reason.
        reason: String,
    },

    /// Transport or storage failure inside an adapter.
    #[error("specification backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SpecImportError {
    /// Wraps an adapter infrastructure error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
