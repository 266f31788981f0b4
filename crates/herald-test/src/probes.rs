//! Drop tracking for lifetime assertions.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many of its [`DropToken`]s have been dropped.
///
/// Embed a token in a listener (or capture it in a closure) to assert when
/// the listener is actually released.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
    dropped: Arc<AtomicUsize>,
}

impl DropCounter {
    /// Create a counter with no drops recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that bumps this counter when dropped.
    #[must_use]
    pub fn token(&self) -> DropToken {
        DropToken {
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Number of tokens dropped so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

/// Increments its [`DropCounter`] on drop.
#[derive(Debug)]
pub struct DropToken {
    dropped: Arc<AtomicUsize>,
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.dropped.fetch_add(1, Ordering::SeqCst);
    }
}
