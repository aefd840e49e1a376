//! Shared world state for correlated delivery BDD scenarios.

use std::collections::HashMap;

use rendezvous::correlation::{
    CorrelationId, CorrelationRegistry, PendingReply, RegistryError, ReplyOutcome,
};
use rstest::fixture;

/// Scenario world for correlated delivery behaviour tests.
pub struct DeliveryWorld {
    /// The registry under test.
    pub registry: CorrelationRegistry<u32>,
    /// Pending replies keyed by their raw correlation ID.
    pub replies: HashMap<String, PendingReply<u32>>,
    /// Outcomes of bounded waits keyed by raw correlation ID.
    pub outcomes: HashMap<String, ReplyOutcome<u32>>,
    /// Result of the last `deliver` call.
    pub last_delivery: Option<bool>,
    /// Result of the last repeated registration.
    pub last_register_error: Option<RegistryError>,
}

impl DeliveryWorld {
    /// Creates a world around an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: CorrelationRegistry::new(),
            replies: HashMap::new(),
            outcomes: HashMap::new(),
            last_delivery: None,
            last_register_error: None,
        }
    }

    /// Removes the pending reply registered for `raw`.
    pub fn take_reply(&mut self, raw: &str) -> Result<PendingReply<u32>, eyre::Report> {
        self.replies
            .remove(raw)
            .ok_or_else(|| eyre::eyre!("no pending reply for '{raw}' in scenario world"))
    }
}

impl Default for DeliveryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DeliveryWorld {
    DeliveryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a correlation identifier from step text.
pub fn parse_id(raw: &str) -> Result<CorrelationId, eyre::Report> {
    CorrelationId::new(raw).map_err(|err| eyre::eyre!("invalid correlation id '{raw}': {err}"))
}
