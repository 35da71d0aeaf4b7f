//! Feed service
//!
//! Runs the whole pipeline for one pair of input files: read the follow
//! file, build the follow graph, read the tweet file, fan tweets out, render.
//! Any failure aborts the run; there is no partial feed.

use std::path::Path;

use crate::app::follow_parser::parse_follow_graph;
use crate::app::tweet_parser::parse_message_board;
use crate::config::Config;
use crate::domain::ports::LineSource;
use crate::error::{FeedError, ReadError};
use crate::feed::render_feed;

/// Service for producing the rendered feed
pub struct FeedService<LS>
where
    LS: LineSource,
{
    source: LS,
}

impl<LS> FeedService<LS>
where
    LS: LineSource,
{
    pub fn new(source: LS) -> Self {
        Self { source }
    }

    /// Produce the feed for the files named in `config`
    pub fn produce_feed(&self, config: &Config) -> Result<String, FeedError> {
        let user_lines = self.read(&config.user_file_path, "user")?;
        let mut graph = parse_follow_graph(&user_lines)?;
        tracing::debug!(users = graph.len(), "Parsed user data");

        let tweet_lines = self.read(&config.tweet_file_path, "tweet")?;
        let board = parse_message_board(&tweet_lines, &mut graph)?;
        tracing::debug!(
            users = graph.len(),
            deliveries = board.delivery_count(),
            "Parsed tweet data"
        );

        tracing::debug!("Building Twitter feed output");
        Ok(render_feed(&graph, &board)?)
    }

    fn read(&self, path: &Path, kind: &str) -> Result<Vec<String>, ReadError> {
        self.source.read_lines(path).inspect_err(|e| {
            tracing::error!(
                error = %e,
                path = %path.display(),
                "Failed to parse Twitter {} file",
                kind
            );
        })
    }
}
