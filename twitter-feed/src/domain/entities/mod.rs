//! Domain entities
//!
//! Pure domain models for the follow graph and the messages fanned out over it.

pub mod follow_graph;
pub mod message_board;
pub mod tweet;

pub use follow_graph::FollowGraph;
pub use message_board::MessageBoard;
pub use tweet::{RenderedMessage, Tweet, MAX_TWEET_CHARS};
