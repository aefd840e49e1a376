//! Outcome of a combined detect-and-import call.

use super::ProjectRef;
use serde::{Deserialize, Serialize};

/// Summary returned by [`crate::spec_import::services::SpecSyncService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSyncOutcome {
    project: ProjectRef,
    detected: usize,
    imported: usize,
    failure: Option<String>,
}

impl SpecSyncOutcome {
    /// Outcome for a project with no importable specifications.
    #[must_use]
    pub const fn not_found(project: ProjectRef) -> Self {
        Self {
            project,
            detected: 0,
            imported: 0,
            failure: None,
        }
    }

    /// Outcome for a successful import.
    #[must_use]
    pub const fn success(project: ProjectRef, detected: usize, imported: usize) -> Self {
        Self {
            project,
            detected,
            imported,
            failure: None,
        }
    }

    /// Outcome for specifications that were found but failed to import.
    #[must_use]
    pub fn failed_import(project: ProjectRef, detected: usize, reason: impl Into<String>) -> Self {
        Self {
            project,
            detected,
            imported: 0,
            failure: Some(reason.into()),
        }
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &ProjectRef {
        &self.project
    }

    /// Returns `true` when detection found at least one specification.
    #[must_use]
    pub const fn found(&self) -> bool {
        self.detected > 0
    }

    /// Returns `true` when the import step ran and failed.
    #[must_use]
    pub const fn import_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Returns the number of specifications detected.
    #[must_use]
    pub const fn detected(&self) -> usize {
        self.detected
    }

    /// Returns the number of specifications imported.
    #[must_use]
    pub const fn imported(&self) -> usize {
        self.imported
    }

    /// Returns the import failure reason, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
