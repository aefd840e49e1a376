//! Application services for tenant management.

mod tenants;

pub use tenants::{
    CreateTenantRequest, TenantService, TenantServiceError, TenantServiceResult,
    UpdateTenantRequest,
};
