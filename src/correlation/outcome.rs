//! Outcome of a bounded wait on a pending reply.

/// Result of [`super::PendingReply::wait_timeout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome<T> {
    /// The payload arrived, possibly while the wait was being abandoned.
    Delivered(T),
    /// No payload arrived before the deadline; the slot was released.
    TimedOut,
    /// The slot was released without a payload by `unregister` or by a
    /// replacing registration.
    Canceled,
}

impl<T> ReplyOutcome<T> {
    /// Returns the delivered payload, if any.
    #[must_use]
    pub fn into_delivered(self) -> Option<T> {
        match self {
            Self::Delivered(payload) => Some(payload),
            Self::TimedOut | Self::Canceled => None,
        }
    }

    /// Returns `true` when the payload was delivered.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}
