//! Domain model for tenants.
//!
//! A tenant has a display name and a URL-safe slug that is unique across
//! all tenants. Infrastructure concerns are kept outside the domain
//! boundary.

mod error;
mod ids;
mod name;
mod slug;
mod tenant;

pub use error::TenantDomainError;
pub use ids::TenantId;
pub use name::TenantName;
pub use slug::TenantSlug;
pub use tenant::Tenant;
