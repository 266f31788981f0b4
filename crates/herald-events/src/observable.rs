//! Subscribe-only view of a publisher.

use std::sync::Arc;

use crate::callback::{CallbackHandle, WeakCallback};

/// Capability to register interest in events of type `Args`.
///
/// This is the view an owner hands out to listeners. It exposes subscription
/// only; publishing stays with the owner (see [`crate::Publisher::fire`]).
/// The trait is object safe, so owners usually expose
/// `&dyn Observable<Args>` and may forward to an inner
/// [`Publisher`](crate::Publisher).
///
/// There is no unsubscribe. A subscription ends once every strong reference
/// to its callback has been dropped.
pub trait Observable<Args> {
    /// Register a weak reference to `callback`.
    ///
    /// Never fails. An already-expired reference is discarded.
    fn subscribe(&self, callback: WeakCallback<Args>);

    /// Register a strong handle by downgrading it.
    fn subscribe_handle(&self, handle: &CallbackHandle<Args>) {
        self.subscribe(Arc::downgrade(handle));
    }
}
