//! Service layer for tenant creation, lookup and updates.

use crate::tenant::{
    domain::{Tenant, TenantDomainError, TenantId, TenantName, TenantSlug},
    ports::{TenantRepository, TenantRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTenantRequest {
    name: String,
    slug: String,
}

impl CreateTenantRequest {
    /// Creates a request with the tenant's display name and slug.
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Request payload for updating a tenant.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTenantRequest {
    name: Option<String>,
    slug: Option<String>,
}

impl UpdateTenantRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Service-level errors for tenant operations.
#[derive(Debug, Error)]
pub enum TenantServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TenantDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TenantRepositoryError),
}

/// Result type for tenant service operations.
pub type TenantServiceResult<T> = Result<T, TenantServiceError>;

/// Tenant management service.
#[derive(Clone)]
pub struct TenantService<R, C>
where
    R: TenantRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TenantService<R, C>
where
    R: TenantRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tenant service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`TenantServiceError::Domain`] when the name or slug is
    /// invalid, or [`TenantServiceError::Repository`] when the slug is taken
    /// or persistence fails.
    pub async fn create(&self, request: CreateTenantRequest) -> TenantServiceResult<Tenant> {
        let CreateTenantRequest { name, slug } = request;
        let tenant = Tenant::new(TenantName::new(name)?, TenantSlug::new(slug)?, &*self.clock);
        self.repository.create(&tenant).await?;
        Ok(tenant)
    }

    /// Finds a tenant by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TenantServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get(&self, id: TenantId) -> TenantServiceResult<Option<Tenant>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a tenant by slug.
    ///
    /// # Errors
    ///
    /// Returns [`TenantServiceError::Domain`] when the slug is malformed, or
    /// [`TenantServiceError::Repository`] when persistence lookup fails.
    pub async fn get_by_slug(&self, slug: &str) -> TenantServiceResult<Option<Tenant>> {
        let tenant_slug = TenantSlug::new(slug)?;
        Ok(self.repository.find_by_slug(&tenant_slug).await?)
    }

    /// Returns all tenants ordered by slug.
    ///
    /// # Errors
    ///
    /// Returns [`TenantServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> TenantServiceResult<Vec<Tenant>> {
        Ok(self.repository.list().await?)
    }

    /// Applies an update to an existing tenant.
    ///
    /// Every supplied field is validated before anything is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TenantServiceError::Domain`] when a new value is invalid,
    /// or [`TenantServiceError::Repository`] when the tenant does not exist,
    /// the new slug is taken or persistence fails.
    pub async fn update(
        &self,
        id: TenantId,
        request: UpdateTenantRequest,
    ) -> TenantServiceResult<Tenant> {
        let UpdateTenantRequest { name, slug } = request;
        let new_name = name.map(TenantName::new).transpose()?;
        let new_slug = slug.map(TenantSlug::new).transpose()?;

        let mut tenant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TenantRepositoryError::NotFound(id))?;

        if let Some(tenant_name) = new_name {
            tenant.rename(tenant_name, &*self.clock);
        }
        if let Some(tenant_slug) = new_slug {
            tenant.change_slug(tenant_slug, &*self.clock);
        }

        self.repository.update(&tenant).await?;
        Ok(tenant)
    }
}
