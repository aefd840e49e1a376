//! Unit tests for the settings module.
