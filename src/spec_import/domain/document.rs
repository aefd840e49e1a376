//! Specification documents and detection reports.

use super::{ProjectRef, SpecImportDomainError};
use serde::{Deserialize, Serialize};

/// One importable specification found for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecDocument {
    path: String,
    format: String,
}

impl SpecDocument {
    /// Creates a document descriptor.
    ///
    /// The format label is trimmed and lowercased (e.g. `openapi`).
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportDomainError::EmptyDocumentPath`] when the path is
    /// empty after trimming.
    pub fn new(
        path: impl Into<String>,
        format: impl Into<String>,
    ) -> Result<Self, SpecImportDomainError> {
        let raw_path = path.into();
        let trimmed_path = raw_path.trim();
        if trimmed_path.is_empty() {
            return Err(SpecImportDomainError::EmptyDocumentPath);
        }
        Ok(Self {
            path: trimmed_path.to_owned(),
            format: format.into().trim().to_ascii_lowercase(),
        })
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the document format label.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Result of a detection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionReport {
    project: ProjectRef,
    documents: Vec<SpecDocument>,
}

impl DetectionReport {
    /// Creates a report for `project`.
    #[must_use]
    pub const fn new(project: ProjectRef, documents: Vec<SpecDocument>) -> Self {
        Self { project, documents }
    }

    /// Creates a report with no documents.
    #[must_use]
    pub const fn empty(project: ProjectRef) -> Self {
        Self::new(project, Vec::new())
    }

    /// Returns the project the report belongs to.
    #[must_use]
    pub const fn project(&self) -> &ProjectRef {
        &self.project
    }

    /// Returns the documents that were found.
    #[must_use]
    pub fn documents(&self) -> &[SpecDocument] {
        &self.documents
    }

    /// Returns `true` when at least one document was found.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.documents.is_empty()
    }
}
