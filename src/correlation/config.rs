//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Bounds on the number of independently locked map segments.
const MIN_SHARDS: usize = 2;
const MAX_SHARDS: usize = 1024;

/// Default number of map segments.
const DEFAULT_SHARDS: usize = 16;

/// Behaviour when `register` is called for an identifier that is still
/// pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Refuse the second registration and keep the first waiter.
    #[default]
    Reject,
    /// Replace the pending slot. The first waiter observes cancellation
    /// immediately instead of waiting out its own deadline.
    Replace,
}

/// Configuration for a [`super::CorrelationRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of independently locked map segments.
    ///
    /// Clamped to `2..=1024` and rounded up to a power of two. Only
    /// throughput depends on this value.
    pub shards: usize,
    /// Duplicate registration policy.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            shards: DEFAULT_SHARDS,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

impl RegistryConfig {
    /// Sets the duplicate registration policy.
    #[must_use]
    pub const fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the requested shard count.
    #[must_use]
    pub const fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    /// Returns the shard count actually used by the registry.
    #[must_use]
    pub fn effective_shards(&self) -> usize {
        self.shards.clamp(MIN_SHARDS, MAX_SHARDS).next_power_of_two()
    }
}
