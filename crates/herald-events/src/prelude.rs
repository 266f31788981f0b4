//! Prelude module - commonly used types for convenient import.
//!
//! Use `use herald_events::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use herald_events::prelude::*;
//!
//! struct Key;
//!
//! let publisher: Publisher<Key, (u8,)> = Publisher::new();
//! let handle: CallbackHandle<(u8,)> = adapter::from_fn(|_: &u8| {});
//! publisher.subscribe_handle(&handle);
//!
//! assert_eq!(publisher.fire(&Key, (1,)), 1);
//! ```

// Callbacks
pub use crate::{Callback, CallbackHandle, WeakCallback};

// Adapters
pub use crate::adapter;
pub use crate::{ArgView, Forward, ForwardMethod};

// Publishing
pub use crate::{Observable, Publisher, SubscriberRegistry};

// Configuration and errors
pub use crate::{EventError, EventResult, PublisherConfig};
