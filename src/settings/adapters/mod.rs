//! Adapter implementations for settings persistence.

pub mod memory;
