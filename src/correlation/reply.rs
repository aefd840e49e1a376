//! Awaitable handle for one pending registration.

use super::registry::RegistryShared;
use super::{CorrelationId, ReplyOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::debug;

/// How an abandoned wait was resolved.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Abandonment<T> {
    /// This handle removed its own slot; no payload can follow.
    Released,
    /// A delivery claimed the slot first and its payload was received.
    Delivered(T),
    /// The slot was released by someone else without a payload.
    Canceled,
}

/// Handle returned by [`super::CorrelationRegistry::register`].
///
/// The handle resolves at most once. Abandoning it through
/// [`cancel`](Self::cancel), an elapsed [`wait_timeout`](Self::wait_timeout)
/// or by dropping it releases the registry slot, so no entry outlives its
/// waiter.
#[must_use = "a pending reply releases its slot as soon as it is dropped"]
pub struct PendingReply<T> {
    id: CorrelationId,
    instance: u64,
    receiver: oneshot::Receiver<T>,
    shared: Arc<RegistryShared<T>>,
    resolved: bool,
}

impl<T> PendingReply<T> {
    pub(super) const fn new(
        id: CorrelationId,
        instance: u64,
        receiver: oneshot::Receiver<T>,
        shared: Arc<RegistryShared<T>>,
    ) -> Self {
        Self {
            id,
            instance,
            receiver,
            shared,
            resolved: false,
        }
    }

    /// Returns the correlation identifier this reply waits on.
    #[must_use]
    pub const fn id(&self) -> &CorrelationId {
        &self.id
    }

    /// Waits without a deadline.
    ///
    /// Returns `None` when the slot was released without a payload, either
    /// by `unregister` or by a replacing registration.
    pub async fn wait(mut self) -> Option<T> {
        let received = (&mut self.receiver).await.ok();
        self.resolved = true;
        received
    }

    /// Waits until the payload arrives or `timeout` elapses.
    ///
    /// On expiry the slot is released in the same step that checks whether
    /// a delivery already claimed it. A payload that races the deadline is
    /// therefore returned as [`ReplyOutcome::Delivered`] rather than lost.
    pub async fn wait_timeout(mut self, timeout: Duration) -> ReplyOutcome<T> {
        let waited = tokio::time::timeout(timeout, &mut self.receiver).await;
        match waited {
            Ok(Ok(payload)) => {
                self.resolved = true;
                ReplyOutcome::Delivered(payload)
            }
            Ok(Err(_)) => {
                self.resolved = true;
                ReplyOutcome::Canceled
            }
            Err(_) => match self.abandon().await {
                Abandonment::Released => {
                    debug!(correlation_id = %self.id, ?timeout, "pending reply timed out");
                    ReplyOutcome::TimedOut
                }
                Abandonment::Delivered(payload) => ReplyOutcome::Delivered(payload),
                Abandonment::Canceled => ReplyOutcome::Canceled,
            },
        }
    }

    /// Abandons the wait.
    ///
    /// Returns the payload when a delivery claimed the slot before the
    /// cancellation did, and `None` otherwise.
    pub async fn cancel(mut self) -> Option<T> {
        match self.abandon().await {
            Abandonment::Delivered(payload) => Some(payload),
            Abandonment::Released | Abandonment::Canceled => None,
        }
    }

    /// Releases this handle's slot unless someone else already resolved it.
    pub(super) async fn abandon(&mut self) -> Abandonment<T> {
        self.resolved = true;
        if self.shared.remove_instance(&self.id, self.instance) {
            return Abandonment::Released;
        }
        // A delivery removed the slot first and sends right after the shard
        // guard is released, or an unregister or replacement dropped the
        // sender. Either way the receiver resolves without waiting on
        // producers.
        match (&mut self.receiver).await {
            Ok(payload) => Abandonment::Delivered(payload),
            Err(_) => Abandonment::Canceled,
        }
    }
}

impl<T> Drop for PendingReply<T> {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }
        // Close first so a delivery that wins the slot afterwards reports
        // failure instead of handing off into a dropped receiver.
        self.receiver.close();
        self.shared.remove_instance(&self.id, self.instance);
    }
}

impl<T> std::fmt::Debug for PendingReply<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingReply")
            .field("id", &self.id)
            .field("instance", &self.instance)
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}
