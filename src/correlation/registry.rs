//! Sharded correlation registry.
//!
//! Every operation holds one shard lock for the lookup, insert or remove
//! step only. `DashMap::remove` hands back the owned slot after the shard
//! guard is released, so payload handoff, sender drops and caller waits
//! never run under a lock.

use super::{CorrelationId, DuplicatePolicy, PendingReply, RegistryConfig, RegistryError};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Pending slot held by the registry map.
struct Slot<T> {
    instance: u64,
    sender: oneshot::Sender<T>,
}

/// State shared between a registry and the replies it hands out.
pub(super) struct RegistryShared<T> {
    slots: DashMap<CorrelationId, Slot<T>>,
    shards: usize,
    next_instance: AtomicU64,
    duplicate_policy: DuplicatePolicy,
}

impl<T> RegistryShared<T> {
    fn new(config: RegistryConfig) -> Self {
        let shards = config.effective_shards();
        Self {
            slots: DashMap::with_shard_amount(shards),
            shards,
            next_instance: AtomicU64::new(0),
            duplicate_policy: config.duplicate_policy,
        }
    }

    /// Removes the slot for `id` only when it is still the given instance.
    ///
    /// Returns `true` when this call released the slot.
    pub(super) fn remove_instance(&self, id: &CorrelationId, instance: u64) -> bool {
        self.slots
            .remove_if(id, |_, slot| slot.instance == instance)
            .is_some()
    }
}

/// Thread-safe registry matching produced results to the waiters that
/// registered for them.
///
/// Cloning the registry yields another handle to the same map, so a
/// subsystem can give one clone to its request side and one to its reply
/// side.
pub struct CorrelationRegistry<T> {
    shared: Arc<RegistryShared<T>>,
}

impl<T> Clone for CorrelationRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for CorrelationRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CorrelationRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrelationRegistry")
            .field("shards", &self.shared.shards)
            .field("duplicate_policy", &self.shared.duplicate_policy)
            .field("pending", &self.len())
            .finish()
    }
}

impl<T> CorrelationRegistry<T> {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            shared: Arc::new(RegistryShared::new(config)),
        }
    }

    /// Registers interest in the result for `id`.
    ///
    /// The returned [`PendingReply`] resolves once a matching
    /// [`deliver`](Self::deliver) hands off a payload. Dropping the reply
    /// without waiting releases the slot.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRegistration`] when `id` is still
    /// pending and the registry uses [`DuplicatePolicy::Reject`].
    pub fn register(&self, id: CorrelationId) -> Result<PendingReply<T>, RegistryError> {
        let (sender, receiver) = oneshot::channel();
        let instance = self.shared.next_instance.fetch_add(1, Ordering::Relaxed);
        let slot = Slot { instance, sender };

        let inserted = match self.shared.slots.entry(id.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(slot);
                Ok(None)
            }
            Entry::Occupied(mut occupied) => match self.shared.duplicate_policy {
                DuplicatePolicy::Reject => Err(slot),
                DuplicatePolicy::Replace => Ok(Some(occupied.insert(slot))),
            },
        };

        let replaced = match inserted {
            Ok(replaced) => replaced,
            Err(rejected) => {
                drop(rejected);
                warn!(correlation_id = %id, "rejected duplicate registration");
                return Err(RegistryError::DuplicateRegistration(id));
            }
        };
        if replaced.is_some() {
            warn!(correlation_id = %id, "replaced pending registration");
        }
        drop(replaced);

        Ok(PendingReply::new(
            id,
            instance,
            receiver,
            Arc::clone(&self.shared),
        ))
    }

    /// Hands `payload` to the waiter registered for `id`.
    ///
    /// Returns `true` when a waiter existed and received the payload. When
    /// no registration is pending (never registered, already resolved or
    /// canceled) the payload is dropped and `false` is returned.
    pub fn deliver(&self, id: &CorrelationId, payload: T) -> bool {
        let Some((_, slot)) = self.shared.slots.remove(id) else {
            debug!(correlation_id = %id, "dropped delivery with no pending registration");
            return false;
        };

        if slot.sender.send(payload).is_err() {
            debug!(correlation_id = %id, "dropped delivery for abandoned waiter");
            return false;
        }
        true
    }

    /// Releases the pending registration for `id`, if any.
    ///
    /// Idempotent. A waiter blocked on the released slot observes
    /// cancellation.
    pub fn unregister(&self, id: &CorrelationId) {
        let removed = self.shared.slots.remove(id);
        drop(removed);
    }

    /// Returns `true` when a registration for `id` is pending.
    #[must_use]
    pub fn contains(&self, id: &CorrelationId) -> bool {
        self.shared.slots.contains_key(id)
    }

    /// Returns the number of pending registrations.
    ///
    /// Shards are counted one after another, so the value is a snapshot only
    /// when no other operation runs concurrently.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.slots.len()
    }

    /// Returns `true` when no registration is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
