//! Listener fixtures.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use herald_events::{Callback, CallbackHandle};

type Deliveries<Args> = Arc<Mutex<Vec<(String, Args)>>>;

/// Records every delivery made to the listeners it creates.
///
/// Each listener is tagged with a name, so tests can assert both what was
/// delivered and in which order listeners ran. Clones share the same log.
pub struct Recorder<Args> {
    deliveries: Deliveries<Args>,
}

impl<Args> Recorder<Args>
where
    Args: Clone + Send + 'static,
{
    /// Create a recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a listener that appends `(name, args)` to the log when called.
    ///
    /// The recorder does not keep the listener alive; drop the returned
    /// handle to end its subscriptions.
    #[must_use]
    pub fn listener(&self, name: impl Into<String>) -> CallbackHandle<Args> {
        let name = name.into();
        let deliveries = Arc::clone(&self.deliveries);
        Callback::handle(move |args: &Args| {
            lock(&deliveries).push((name.clone(), args.clone()));
        })
    }

    /// Every delivery so far, in call order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<(String, Args)> {
        lock(&self.deliveries).clone()
    }

    /// Listener names in call order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        lock(&self.deliveries)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Number of deliveries so far.
    #[must_use]
    pub fn count(&self) -> usize {
        lock(&self.deliveries).len()
    }

    /// Forget all recorded deliveries.
    pub fn clear(&self) {
        lock(&self.deliveries).clear();
    }
}

fn lock<Args>(deliveries: &Deliveries<Args>) -> MutexGuard<'_, Vec<(String, Args)>> {
    // A panicking listener under test must not hide what was recorded.
    deliveries.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<Args> Clone for Recorder<Args> {
    fn clone(&self) -> Self {
        Self {
            deliveries: Arc::clone(&self.deliveries),
        }
    }
}

impl<Args> Default for Recorder<Args>
where
    Args: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Recorder<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("deliveries", &lock(&self.deliveries).len())
            .finish()
    }
}
