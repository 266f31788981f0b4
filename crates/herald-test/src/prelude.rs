//! Prelude module - commonly used test utilities.
//!
//! Use `use herald_test::prelude::*;` to import all test helpers.

pub use crate::{DropCounter, DropToken, Recorder};
pub use crate::{setup_test_logging, setup_test_logging_default};
