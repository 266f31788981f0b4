//! Building [`CallbackHandle`]s from functions and bound methods.
//!
//! Three binding forms share one output type, so a publisher never needs to
//! know what sits behind a subscription:
//!
//! | Function        | Target                          | Instance lifetime                  |
//! |-----------------|---------------------------------|------------------------------------|
//! | [`from_fn`]     | free function or closure        | n/a                                |
//! | [`from_shared`] | method on an `Arc<T>`           | kept alive by the handle           |
//! | [`from_weak`]   | method on a `Weak<T>`           | not extended; dead instance skipped|
//!
//! [`from_weak`] is the form for listeners that own their own handle. Build the
//! listener with [`Arc::new_cyclic`] and bind the handle to the weak
//! self-reference; the handle then dies together with the listener and no
//! reference cycle is created.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use herald_events::{CallbackHandle, adapter};
//!
//! struct Listener {
//!     log: Mutex<Vec<String>>,
//!     handle: CallbackHandle<(u32, String)>,
//! }
//!
//! impl Listener {
//!     fn on_event(&self, id: u32, name: &str) {
//!         self.log.lock().unwrap().push(format!("{id}={name}"));
//!     }
//! }
//!
//! let listener = Arc::new_cyclic(|me| Listener {
//!     log: Mutex::new(Vec::new()),
//!     handle: adapter::from_weak(me.clone(), Listener::on_event),
//! });
//!
//! listener.handle.call(&(1, "one".to_string()));
//! assert_eq!(*listener.log.lock().unwrap(), vec!["1=one"]);
//! ```

use std::sync::{Arc, Weak};

use tracing::trace;

use crate::callback::{Callback, CallbackHandle};
use crate::forward::{Forward, ForwardMethod};

/// Bind a free function or closure.
///
/// The target takes the publisher's arguments individually: a publisher of
/// `(i32, String)` accepts `fn(i32, &str)`. See [`ArgView`](crate::ArgView)
/// for the accepted parameter types.
#[must_use]
pub fn from_fn<Args, Marker, F>(function: F) -> CallbackHandle<Args>
where
    Args: 'static,
    Marker: 'static,
    F: Forward<Args, Marker>,
{
    Callback::handle(move |args: &Args| function.forward(args))
}

/// Bind a method to an instance held by shared ownership.
///
/// The returned handle owns a clone of `instance`, so the instance stays alive
/// at least as long as the handle does.
#[must_use]
pub fn from_shared<T, Args, Marker, M>(instance: Arc<T>, method: M) -> CallbackHandle<Args>
where
    T: Send + Sync + 'static,
    Args: 'static,
    Marker: 'static,
    M: ForwardMethod<T, Args, Marker>,
{
    Callback::handle(move |args: &Args| method.forward_to(instance.as_ref(), args))
}

/// Bind a method to an instance without extending its lifetime.
///
/// Each invocation upgrades `instance` for the duration of the call. If the
/// instance has already been dropped the call is skipped.
#[must_use]
pub fn from_weak<T, Args, Marker, M>(instance: Weak<T>, method: M) -> CallbackHandle<Args>
where
    T: Send + Sync + 'static,
    Args: 'static,
    Marker: 'static,
    M: ForwardMethod<T, Args, Marker>,
{
    Callback::handle(move |args: &Args| {
        if let Some(target) = instance.upgrade() {
            method.forward_to(target.as_ref(), args);
        } else {
            trace!(
                instance = std::any::type_name::<T>(),
                "Bound instance dropped, skipping callback"
            );
        }
    })
}
