//! Unit tests for the correlation registry.
