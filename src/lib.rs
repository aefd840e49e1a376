//! Rendezvous: request/response correlation across asynchronous
//! boundaries.
//!
//! A caller that sends a request over a channel whose reply arrives
//! through a separate path registers a correlation ID with a
//! [`correlation::CorrelationRegistry`], waits on the returned handle, and
//! the inbound path delivers the reply by ID.
//!
//! # Architecture
//!
//! The surrounding services follow hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, transport)
//!
//! # Modules
//!
//! - [`correlation`]: Correlation registry and pending reply handles
//! - [`spec_import`]: Specification detection and import, including
//!   out-of-band detection over the registry
//! - [`tenant`]: Tenant records
//! - [`settings`]: Key/value application settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod correlation;
pub mod settings;
pub mod spec_import;
pub mod telemetry;
pub mod tenant;
