//! Adapter implementations for specification detection and import.

pub mod correlated;
pub mod memory;
