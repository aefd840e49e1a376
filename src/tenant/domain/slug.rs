//! Validated tenant slug.

use super::TenantDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum slug length, one DNS label.
const MAX_SLUG_LENGTH: usize = 63;

/// URL-safe unique tenant handle (e.g. `acme`, `north-wind-2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Creates a validated slug.
    ///
    /// The input is trimmed and lowercased. The result must consist of
    /// `[a-z0-9]` segments joined by single hyphens.
    ///
    /// # Errors
    ///
    /// Returns [`TenantDomainError::EmptySlug`] when the value is empty
    /// after trimming, [`TenantDomainError::SlugTooLong`] when it exceeds 63
    /// characters, or [`TenantDomainError::InvalidSlug`] when it does not
    /// match the slug pattern.
    pub fn new(value: impl Into<String>) -> Result<Self, TenantDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(TenantDomainError::EmptySlug);
        }

        if normalized.len() > MAX_SLUG_LENGTH {
            return Err(TenantDomainError::SlugTooLong(raw));
        }

        let is_valid = normalized.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });

        if !is_valid {
            return Err(TenantDomainError::InvalidSlug(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantSlug {
    type Error = TenantDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TenantSlug> for String {
    fn from(slug: TenantSlug) -> Self {
        slug.0
    }
}

impl AsRef<str> for TenantSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
