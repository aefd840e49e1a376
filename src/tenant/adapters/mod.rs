//! Adapter implementations for tenant persistence.

pub mod memory;
