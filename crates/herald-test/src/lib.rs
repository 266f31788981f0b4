//! Herald Test - Shared test utilities for Herald crates.
//!
//! This crate provides listener fixtures and test helpers that can be used
//! across Herald crates as a dev-dependency.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! herald-test.workspace = true
//! ```
//!
//! Then use in your tests:
//!
//! ```rust
//! use herald_events::{Observable, Publisher};
//! use herald_test::{Recorder, setup_test_logging_default};
//!
//! struct Key;
//!
//! setup_test_logging_default();
//!
//! let recorder = Recorder::<(u32,)>::new();
//! let publisher = Publisher::<Key, (u32,)>::new();
//! let listener = recorder.listener("a");
//! publisher.subscribe_handle(&listener);
//!
//! publisher.fire(&Key, (7,));
//! assert_eq!(recorder.deliveries(), vec![("a".to_string(), (7,))]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod probes;

pub use fixtures::*;
pub use harness::*;
pub use probes::*;
