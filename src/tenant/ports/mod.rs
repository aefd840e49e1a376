//! Port contracts for tenant persistence.

pub mod repository;

pub use repository::{TenantRepository, TenantRepositoryError, TenantRepositoryResult};
