//! Domain layer
//!
//! Pure data structures of the feed with no I/O.
//! - `entities`: Follow graph, message board and tweets
//! - `ports`: Trait definitions for reading input

pub mod entities;
pub mod ports;
