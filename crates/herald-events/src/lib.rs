//! Herald Events - weak-reference typed event publisher.
//!
//! This crate provides:
//! - Shared-ownership callback handles ([`Callback`], [`CallbackHandle`])
//! - Adapters binding free functions and methods to handles ([`adapter`])
//! - A registry of weak subscriber references with lazy cleanup
//! - An owner-restricted [`Publisher`] and its subscribe-only view
//!   ([`Observable`])
//!
//! # Architecture
//!
//! A listener builds a [`CallbackHandle`] and keeps it for as long as it wants
//! to be notified. It hands the publisher a weak reference to that handle.
//! When the owner calls [`Publisher::fire`], expired entries are purged, the
//! survivors are snapshotted, and each live callback is invoked synchronously
//! in subscription order.
//!
//! There is no unsubscribe: dropping the handle ends the subscription, even
//! from inside the handle's own callback.
//!
//! # Example
//!
//! The owner names a private key type as `O`. Only code that can construct
//! the key can fire, while listeners see the subscribe-only view.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use herald_events::{CallbackHandle, adapter};
//!
//! mod sensor {
//!     use herald_events::{Observable, Publisher};
//!
//!     /// Not constructible outside this module.
//!     struct ReadingKey;
//!
//!     pub struct Sensor {
//!         readings: Publisher<ReadingKey, (u32, String)>,
//!     }
//!
//!     impl Sensor {
//!         pub fn new() -> Self {
//!             Self { readings: Publisher::new() }
//!         }
//!
//!         pub fn events(&self) -> &dyn Observable<(u32, String)> {
//!             &self.readings
//!         }
//!
//!         pub fn sample(&self, value: u32) -> usize {
//!             self.readings.fire(&ReadingKey, (value, "celsius".to_string()))
//!         }
//!     }
//! }
//!
//! let sensor = sensor::Sensor::new();
//!
//! let seen = Arc::new(AtomicU32::new(0));
//! let sink = Arc::clone(&seen);
//! let handle: CallbackHandle<(u32, String)> =
//!     adapter::from_fn(move |value: u32, _unit: &str| {
//!         sink.store(value, Ordering::SeqCst);
//!     });
//! sensor.events().subscribe_handle(&handle);
//!
//! assert_eq!(sensor.sample(21), 1);
//! assert_eq!(seen.load(Ordering::SeqCst), 21);
//!
//! // Dropping the handle is the only way to unsubscribe.
//! drop(handle);
//! assert_eq!(sensor.sample(22), 0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapter;
pub mod prelude;

mod callback;
mod config;
mod error;
mod forward;
mod observable;
mod publisher;
mod registry;

pub use callback::{Callback, CallbackHandle, WeakCallback};
pub use config::{DEFAULT_LABEL, MAX_INITIAL_CAPACITY, MAX_LABEL_LEN, PublisherConfig};
pub use error::{EventError, EventResult};
pub use forward::{ArgView, Forward, ForwardMethod};
pub use observable::Observable;
pub use publisher::Publisher;
pub use registry::SubscriberRegistry;
