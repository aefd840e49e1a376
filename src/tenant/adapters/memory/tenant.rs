//! In-memory repository for tenant tests and local runs.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::tenant::{
    domain::{Tenant, TenantId, TenantSlug},
    ports::{TenantRepository, TenantRepositoryError, TenantRepositoryResult},
};

/// Thread-safe in-memory tenant repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantRepository {
    state: Arc<RwLock<InMemoryTenantState>>,
}

#[derive(Debug, Default)]
struct InMemoryTenantState {
    tenants: HashMap<TenantId, Tenant>,
    slug_index: BTreeMap<TenantSlug, TenantId>,
}

impl InMemoryTenantRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TenantRepositoryError {
    TenantRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn create(&self, tenant: &Tenant) -> TenantRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.tenants.contains_key(&tenant.id()) {
            return Err(TenantRepositoryError::DuplicateTenant(tenant.id()));
        }

        if state.slug_index.contains_key(tenant.slug()) {
            return Err(TenantRepositoryError::DuplicateSlug(tenant.slug().clone()));
        }

        state.slug_index.insert(tenant.slug().clone(), tenant.id());
        state.tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn update(&self, tenant: &Tenant) -> TenantRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        let old_slug = state
            .tenants
            .get(&tenant.id())
            .ok_or(TenantRepositoryError::NotFound(tenant.id()))?
            .slug()
            .clone();

        if *tenant.slug() != old_slug {
            if let Some(&indexed_id) = state.slug_index.get(tenant.slug())
                && indexed_id != tenant.id()
            {
                return Err(TenantRepositoryError::DuplicateSlug(tenant.slug().clone()));
            }
            state.slug_index.remove(&old_slug);
            state.slug_index.insert(tenant.slug().clone(), tenant.id());
        }

        state.tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TenantId) -> TenantRepositoryResult<Option<Tenant>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tenants.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &TenantSlug) -> TenantRepositoryResult<Option<Tenant>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .slug_index
            .get(slug)
            .and_then(|id| state.tenants.get(id))
            .cloned())
    }

    async fn list(&self) -> TenantRepositoryResult<Vec<Tenant>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .slug_index
            .values()
            .filter_map(|id| state.tenants.get(id))
            .cloned()
            .collect())
    }
}
