//! Import port.

use super::SpecImportResult;
use crate::spec_import::domain::{ProjectRef, SpecDocument};
use async_trait::async_trait;

/// Ingests detected specification documents.
#[async_trait]
pub trait SpecImporter: Send + Sync {
    /// Imports `documents` for `project` and returns how many were stored.
    async fn import(
        &self,
        project: &ProjectRef,
        documents: &[SpecDocument],
    ) -> SpecImportResult<usize>;
}
