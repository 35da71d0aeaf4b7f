//! Feed module
//!
//! Plain-text rendering of per-user feeds.

pub mod renderer;

pub use renderer::render_feed;
