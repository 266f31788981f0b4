//! Shared-ownership callable handles.

use std::fmt;
use std::sync::{Arc, Weak};

/// Strong handle to a [`Callback`].
///
/// The subscriber that created the handle keeps it alive for as long as it
/// wants to receive events. Publishers never hold one of these.
pub type CallbackHandle<Args> = Arc<Callback<Args>>;

/// Non-owning reference to a [`Callback`], as stored by a publisher.
pub type WeakCallback<Args> = Weak<Callback<Args>>;

/// A type-erased callable that receives one argument tuple by reference.
///
/// Callbacks are `Send + Sync` so that a publisher holding weak references to
/// them can itself be shared between threads. This applies even when every
/// publisher lives on one thread: listener state kept in `Cell` or `RefCell`
/// (or behind an `Rc`) is rejected, so use atomics or a `Mutex` instead. The
/// same bound applies to instances bound through [`crate::adapter`].
///
/// ```compile_fail
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use herald_events::Callback;
///
/// let count = Rc::new(Cell::new(0));
/// let handle = Callback::<()>::handle(move |_| count.set(count.get() + 1));
/// ```
pub struct Callback<Args> {
    func: Box<dyn Fn(&Args) + Send + Sync>,
}

impl<Args> Callback<Args> {
    /// Wrap a closure taking the whole argument tuple.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// Wrap a closure and return a strong handle to it.
    #[must_use]
    pub fn handle<F>(func: F) -> CallbackHandle<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        Arc::new(Self::new(func))
    }

    /// Invoke the wrapped callable.
    pub fn call(&self, args: &Args) {
        (self.func)(args);
    }
}

impl<Args> fmt::Debug for Callback<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}
