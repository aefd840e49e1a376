//! In-memory importer for tests and local runs.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::spec_import::{
    domain::{ProjectRef, SpecDocument},
    ports::{SpecImportError, SpecImportResult, SpecImporter},
};

/// Records imported documents per project.
///
/// Re-importing a document that is already stored for the project is
/// skipped and not counted.
#[derive(Debug, Clone, Default)]
pub struct InMemorySpecImporter {
    state: Arc<RwLock<InMemoryImporterState>>,
}

#[derive(Debug, Default)]
struct InMemoryImporterState {
    imported: HashMap<ProjectRef, Vec<SpecDocument>>,
    rejecting: HashMap<ProjectRef, String>,
}

fn lock_error(err: impl ToString) -> SpecImportError {
    SpecImportError::backend(std::io::Error::other(err.to_string()))
}

impl InMemorySpecImporter {
    /// Creates an empty importer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every import for `project` fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn reject(&self, project: ProjectRef, reason: impl Into<String>) -> SpecImportResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.rejecting.insert(project, reason.into());
        Ok(())
    }

    /// Returns the documents imported for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportError::Backend`] when lock acquisition fails.
    pub fn imported(&self, project: &ProjectRef) -> SpecImportResult<Vec<SpecDocument>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.imported.get(project).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl SpecImporter for InMemorySpecImporter {
    async fn import(
        &self,
        project: &ProjectRef,
        documents: &[SpecDocument],
    ) -> SpecImportResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;

        if let Some(reason) = state.rejecting.get(project) {
            return Err(SpecImportError::ImportFailed {
                project: project.clone(),
                reason: reason.clone(),
            });
        }

        let stored = state.imported.entry(project.clone()).or_default();
        let mut known: HashSet<SpecDocument> = stored.iter().cloned().collect();
        let mut added = 0;
        for document in documents {
            if known.insert(document.clone()) {
                stored.push(document.clone());
                added += 1;
            }
        }
        Ok(added)
    }
}
