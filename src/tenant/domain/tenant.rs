//! Tenant aggregate root.

use super::{TenantId, TenantName, TenantSlug};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Tenant aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    id: TenantId,
    name: TenantName,
    slug: TenantSlug,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Creates a new tenant.
    #[must_use]
    pub fn new(name: TenantName, slug: TenantSlug, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TenantId::new(),
            name,
            slug,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the tenant identifier.
    #[must_use]
    pub const fn id(&self) -> TenantId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TenantName {
        &self.name
    }

    /// Returns the unique slug.
    #[must_use]
    pub const fn slug(&self) -> &TenantSlug {
        &self.slug
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the display name.
    pub fn rename(&mut self, name: TenantName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the slug.
    pub fn change_slug(&mut self, slug: TenantSlug, clock: &impl Clock) {
        self.slug = slug;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
