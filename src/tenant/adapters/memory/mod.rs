//! In-memory tenant adapters.

mod tenant;

pub use tenant::InMemoryTenantRepository;
