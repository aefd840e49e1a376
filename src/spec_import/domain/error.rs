//! Error types for specification import domain validation.

use thiserror::Error;

/// Errors returned while constructing specification import domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecImportDomainError {
    /// The project reference is empty after trimming.
    #[error("project reference must not be empty")]
    EmptyProjectRef,

    /// The specification document path is empty after trimming.
    #[error("specification document path must not be empty")]
    EmptyDocumentPath,
}
