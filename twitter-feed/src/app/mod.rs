//! Application layer
//!
//! Contains the line parsers and the feed pipeline.
//! Parsers turn raw input lines into domain structures; the feed service
//! coordinates them with the line source and the renderer.

pub mod feed_service;
pub mod follow_parser;
pub mod tweet_parser;

pub use feed_service::FeedService;
