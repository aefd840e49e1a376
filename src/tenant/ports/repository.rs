//! Repository port for tenant persistence.

use crate::tenant::domain::{Tenant, TenantId, TenantSlug};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tenant repository operations.
pub type TenantRepositoryResult<T> = Result<T, TenantRepositoryError>;

/// Tenant persistence contract.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Stores a new tenant.
    ///
    /// # Errors
    ///
    /// Returns [`TenantRepositoryError::DuplicateTenant`] when the ID already
    /// exists or [`TenantRepositoryError::DuplicateSlug`] when the slug is
    /// taken.
    async fn create(&self, tenant: &Tenant) -> TenantRepositoryResult<()>;

    /// Persists changes to an existing tenant.
    ///
    /// # Errors
    ///
    /// Returns [`TenantRepositoryError::NotFound`] when the tenant does not
    /// exist or [`TenantRepositoryError::DuplicateSlug`] when the new slug
    /// belongs to another tenant.
    async fn update(&self, tenant: &Tenant) -> TenantRepositoryResult<()>;

    /// Finds a tenant by identifier.
    async fn find_by_id(&self, id: TenantId) -> TenantRepositoryResult<Option<Tenant>>;

    /// Finds a tenant by slug.
    async fn find_by_slug(&self, slug: &TenantSlug) -> TenantRepositoryResult<Option<Tenant>>;

    /// Returns all tenants ordered by slug.
    async fn list(&self) -> TenantRepositoryResult<Vec<Tenant>>;
}

/// Errors returned by tenant repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TenantRepositoryError {
    /// A tenant with the same identifier already exists.
    #[error("duplicate tenant identifier: {0}")]
    DuplicateTenant(TenantId),

    /// A tenant with the same slug already exists.
    #[error("duplicate tenant slug: {0}")]
    DuplicateSlug(TenantSlug),

    /// The tenant was not found.
    #[error("tenant not found: {0}")]
    NotFound(TenantId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TenantRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
