//! Detect-then-import orchestration.

use crate::spec_import::{
    domain::{ProjectRef, SpecImportDomainError, SpecSyncOutcome},
    ports::{SpecDetector, SpecImportError, SpecImporter},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for detect-and-import calls.
#[derive(Debug, Error)]
pub enum SpecSyncError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SpecImportDomainError),
    /// The detection step failed.
    #[error(transparent)]
    Detection(#[from] SpecImportError),
}

/// Result type for detect-and-import calls.
pub type SpecSyncResult<T> = Result<T, SpecSyncError>;

/// Runs detection and, when anything is found, import.
pub struct SpecSyncService<D, I>
where
    D: SpecDetector,
    I: SpecImporter,
{
    detector: Arc<D>,
    importer: Arc<I>,
}

impl<D, I> Clone for SpecSyncService<D, I>
where
    D: SpecDetector,
    I: SpecImporter,
{
    fn clone(&self) -> Self {
        Self {
            detector: Arc::clone(&self.detector),
            importer: Arc::clone(&self.importer),
        }
    }
}

impl<D, I> SpecSyncService<D, I>
where
    D: SpecDetector,
    I: SpecImporter,
{
    /// Creates a new service.
    #[must_use]
    pub const fn new(detector: Arc<D>, importer: Arc<I>) -> Self {
        Self { detector, importer }
    }

    /// Detects specifications for `project` and imports any that are found.
    ///
    /// An import failure does not fail the call; it is reported through
    /// [`SpecSyncOutcome::import_failed`].
    ///
    /// # Errors
    ///
    /// Returns [`SpecSyncError::Domain`] when `project` is blank, or
    /// [`SpecSyncError::Detection`] when the detection step fails.
    pub async fn detect_and_import(&self, project: &str) -> SpecSyncResult<SpecSyncOutcome> {
        let project_ref = ProjectRef::new(project)?;
        let report = self.detector.detect(&project_ref).await?;

        if !report.found() {
            info!(project = %project_ref, "no importable specifications found");
            return Ok(SpecSyncOutcome::not_found(project_ref));
        }

        let detected = report.documents().len();
        match self.importer.import(&project_ref, report.documents()).await {
            Ok(imported) => {
                info!(project = %project_ref, detected, imported, "specifications imported");
                Ok(SpecSyncOutcome::success(project_ref, detected, imported))
            }
            Err(err) => {
                warn!(project = %project_ref, detected, error = %err, "specification import failed");
                Ok(SpecSyncOutcome::failed_import(
                    project_ref,
                    detected,
                    err.to_string(),
                ))
            }
        }
    }
}
