//! Detection and import of project specifications.
//!
//! A detection step looks for importable specification documents belonging
//! to a project; when any are found an import step ingests them. Detection
//! may run out of band: [`adapters::correlated::CorrelatedSpecDetector`]
//! sends a request through a transport port and matches the reply through
//! a [`crate::correlation::CorrelationRegistry`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
