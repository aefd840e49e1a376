//! Project reference type.

use super::SpecImportDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the project whose specifications are detected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectRef(String);

impl ProjectRef {
    /// Creates a trimmed project reference.
    ///
    /// # Errors
    ///
    /// Returns [`SpecImportDomainError::EmptyProjectRef`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SpecImportDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SpecImportDomainError::EmptyProjectRef);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectRef {
    type Error = SpecImportDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectRef> for String {
    fn from(reference: ProjectRef) -> Self {
        reference.0
    }
}

impl AsRef<str> for ProjectRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
