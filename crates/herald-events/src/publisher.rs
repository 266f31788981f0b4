//! Owner-restricted event publisher.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, trace, warn};

use crate::callback::WeakCallback;
use crate::config::PublisherConfig;
use crate::error::EventResult;
use crate::observable::Observable;
use crate::registry::SubscriberRegistry;

/// Broadcasts `Args` to weakly referenced subscribers on behalf of owner `O`.
///
/// Anyone can [`subscribe`](Observable::subscribe). Only code that can produce
/// a `&O` can [`fire`](Self::fire). Owners keep a private zero-sized key type
/// as `O` so that no other module can construct the witness. Using a public
/// owner type as `O` lets anyone holding a reference to the owner fire.
///
/// Expired subscriptions are removed lazily, at the start of the next
/// [`fire`](Self::fire).
///
/// # Reentrancy
///
/// The registry lock is released before any callback runs. A callback may
/// subscribe to, or fire, the publisher that is invoking it. New
/// subscriptions are not delivered until the next call to `fire`.
pub struct Publisher<O: ?Sized, Args> {
    registry: Mutex<SubscriberRegistry<Args>>,
    label: String,
    _owner: PhantomData<fn(&O)>,
}

impl<O: ?Sized, Args> Publisher<O, Args> {
    /// Create a publisher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(PublisherConfig::default())
    }

    /// Create a publisher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidConfig`](crate::EventError::InvalidConfig)
    /// if the configuration fails validation.
    pub fn with_config(config: PublisherConfig) -> EventResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: PublisherConfig) -> Self {
        Self {
            registry: Mutex::new(SubscriberRegistry::with_capacity(config.initial_capacity)),
            label: config.label,
            _owner: PhantomData,
        }
    }

    /// Deliver `args` to every live subscriber, in subscription order.
    ///
    /// Expired entries are purged first. The surviving entries are then
    /// copied, and the copy is what gets delivered to: subscriptions added by
    /// a callback during this call wait for the next one. Each callback is
    /// kept alive for the duration of its own invocation, so a listener may
    /// drop its last handle from inside the callback.
    ///
    /// Returns the number of callbacks invoked.
    pub fn fire(&self, _owner: &O, args: Args) -> usize {
        let (purged, snapshot) = {
            let mut registry = self.lock_registry();
            let purged = registry.purge();
            (purged, registry.snapshot())
        };

        let mut delivered: usize = 0;
        let mut skipped: usize = 0;
        for (index, entry) in snapshot.iter().enumerate() {
            if let Some(callback) = entry.upgrade() {
                trace!(publisher = %self.label, index, "Delivering event");
                callback.call(&args);
                delivered = delivered.saturating_add(1);
            } else {
                trace!(publisher = %self.label, index, "Subscriber expired during delivery");
                skipped = skipped.saturating_add(1);
            }
        }

        debug!(
            publisher = %self.label,
            purged,
            delivered,
            skipped,
            "Event fired"
        );

        delivered
    }

    /// Number of registry entries, including expired ones not yet purged.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock_registry().len()
    }

    /// Number of registry entries whose callback is still alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.lock_registry().live_count()
    }

    /// True if the registry holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_registry().is_empty()
    }

    /// The label attached to this publisher's tracing events.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn lock_registry(&self) -> MutexGuard<'_, SubscriberRegistry<Args>> {
        self.registry.lock().unwrap_or_else(|e| {
            warn!(publisher = %self.label, "Subscriber registry lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl<O: ?Sized, Args> Observable<Args> for Publisher<O, Args> {
    fn subscribe(&self, callback: WeakCallback<Args>) {
        if !self.lock_registry().insert(callback) {
            trace!(publisher = %self.label, "Discarding expired subscription");
        }
    }
}

impl<O: ?Sized, Args> Default for Publisher<O, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ?Sized, Args> fmt::Debug for Publisher<O, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("label", &self.label)
            .field("registry", &*self.lock_registry())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter;
    use crate::callback::{Callback, CallbackHandle};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Owner;

    type Log = Arc<Mutex<Vec<String>>>;

    fn listener(name: &'static str, log: &Log) -> CallbackHandle<(i32, String)> {
        let log = Arc::clone(log);
        adapter::from_fn(move |a: i32, b: &str| {
            log.lock().unwrap().push(format!("{name}:{a}:{b}"));
        })
    }

    #[test]
    fn test_fire_with_no_subscribers() {
        let publisher = Publisher::<Owner, (i32, String)>::new();
        assert_eq!(publisher.fire(&Owner, (1, "a".into())), 0);
        assert!(publisher.is_empty());
    }

    #[test]
    fn test_fire_delivers_in_subscribe_order() {
        let log = Log::default();
        let publisher = Publisher::<Owner, (i32, String)>::new();
        let a = listener("a", &log);
        let b = listener("b", &log);
        let c = listener("c", &log);

        publisher.subscribe_handle(&a);
        publisher.subscribe_handle(&b);
        publisher.subscribe_handle(&c);

        assert_eq!(publisher.fire(&Owner, (42, "x".into())), 3);
        assert_eq!(*log.lock().unwrap(), vec!["a:42:x", "b:42:x", "c:42:x"]);
    }

    #[test]
    fn test_released_listener_is_purged_before_delivery() {
        let log = Log::default();
        let publisher = Publisher::<Owner, (i32, String)>::new();
        let a = listener("a", &log);
        let b = listener("b", &log);
        let c = listener("c", &log);
        for handle in [&a, &b, &c] {
            publisher.subscribe_handle(handle);
        }

        drop(b);
        assert_eq!(publisher.subscriber_count(), 3);
        assert_eq!(publisher.live_count(), 2);

        assert_eq!(publisher.fire(&Owner, (42, "x".into())), 2);
        assert_eq!(publisher.subscriber_count(), 2);
        assert_eq!(*log.lock().unwrap(), vec!["a:42:x", "c:42:x"]);
    }

    #[test]
    fn test_expired_subscription_is_discarded() {
        let log = Log::default();
        let publisher = Publisher::<Owner, (i32, String)>::new();
        let dead = listener("dead", &log);
        let weak = Arc::downgrade(&dead);
        drop(dead);

        publisher.subscribe(weak);

        assert!(publisher.is_empty());
        assert_eq!(publisher.fire(&Owner, (0, String::new())), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_subscription_delivers_twice() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handle: CallbackHandle<()> = Callback::handle(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let publisher = Publisher::<Owner, ()>::new();

        publisher.subscribe_handle(&handle);
        publisher.subscribe_handle(&handle);

        assert_eq!(publisher.fire(&Owner, ()), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_with_config() {
        let publisher = Publisher::<Owner, ()>::with_config(
            PublisherConfig::new("window.resized").with_initial_capacity(4),
        )
        .unwrap();
        assert_eq!(publisher.label(), "window.resized");

        let rejected = Publisher::<Owner, ()>::with_config(PublisherConfig::new(""));
        assert!(rejected.is_err());
    }

    #[test]
    fn test_default_label() {
        let publisher = Publisher::<Owner, ()>::default();
        assert_eq!(publisher.label(), crate::config::DEFAULT_LABEL);
    }

    #[test]
    fn test_debug_output() {
        let publisher = Publisher::<Owner, ()>::with_config(PublisherConfig::new("dbg")).unwrap();
        let handle = Callback::<()>::handle(|_| {});
        publisher.subscribe_handle(&handle);

        assert_eq!(
            format!("{publisher:?}"),
            "Publisher { label: \"dbg\", registry: SubscriberRegistry { entries: 1, live: 1 } }"
        );
    }

    #[test]
    fn test_publisher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Publisher<Owner, (i32, String)>>();
        assert_send_sync::<Publisher<std::rc::Rc<u8>, ()>>();
    }

    #[test]
    fn test_subscribe_through_trait_object() {
        let log = Log::default();
        let publisher = Publisher::<Owner, (i32, String)>::new();
        let handle = listener("dyn", &log);

        let view: &dyn Observable<(i32, String)> = &publisher;
        view.subscribe_handle(&handle);

        publisher.fire(&Owner, (5, "five".into()));
        assert_eq!(*log.lock().unwrap(), vec!["dyn:5:five"]);
    }
}
