//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The pipeline only touches the outside world through `LineSource`, so an
//! in-memory implementation is enough to drive every stage without files.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
