//! Ordered registry of weak subscriber references.

use std::fmt;

use crate::callback::WeakCallback;

/// Ordered sequence of weak references to subscriber callbacks.
///
/// The registry never keeps a callback alive. Entries whose callback has been
/// dropped stay in place until [`purge`](Self::purge) runs; publishers call it
/// once per dispatch, so cleanup is lazy.
///
/// Duplicate entries are allowed and each one counts as a separate
/// subscription.
pub struct SubscriberRegistry<Args> {
    entries: Vec<WeakCallback<Args>>,
}

impl<Args> SubscriberRegistry<Args> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty registry with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append a subscription.
    ///
    /// Returns `false` without storing anything if `callback` has already
    /// expired.
    pub fn insert(&mut self, callback: WeakCallback<Args>) -> bool {
        if callback.strong_count() == 0 {
            return false;
        }
        self.entries.push(callback);
        true
    }

    /// Remove expired entries, keeping the survivors in order.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.strong_count() > 0);
        before.saturating_sub(self.entries.len())
    }

    /// Copy the current entries into an independent list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WeakCallback<Args>> {
        self.entries.clone()
    }

    /// Number of entries, including expired ones not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose callback is still alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}

impl<Args> Default for SubscriberRegistry<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for SubscriberRegistry<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("entries", &self.entries.len())
            .field("live", &self.live_count())
            .finish()
    }
}
