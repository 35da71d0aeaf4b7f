//! Twitter feed generator
//!
//! Builds a per-user feed from a follow-relationship file and a tweet file.
//! Input paths come from `--user-file` / `--tweet-file`, or the
//! `USER_FILE_PATH` / `TWEET_FILE_PATH` environment variables (a `.env` file
//! is honoured). The feed is written to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use adapters::FsLineReader;
use app::FeedService;
use config::{Config, ENV_TWEET_FILE_PATH, ENV_USER_FILE_PATH};
use error::FeedError;

#[derive(Debug, Parser)]
#[command(name = "twitter-feed", version, about = "Render per-user Twitter feeds")]
struct Cli {
    /// Path to the follow-relationship file (overrides USER_FILE_PATH)
    #[arg(long)]
    user_file: Option<String>,

    /// Path to the tweet file (overrides TWEET_FILE_PATH)
    #[arg(long)]
    tweet_file: Option<String>,
}

impl Cli {
    fn value_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_USER_FILE_PATH => self.user_file.clone(),
            ENV_TWEET_FILE_PATH => self.tweet_file.clone(),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout carries the feed)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Generating Twitter feed");

    match run(&cli) {
        Ok(feed) => {
            print!("{}", feed);
            tracing::info!("Twitter feed generated successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate Twitter feed");
            Err(e.into())
        }
    }
}

fn run(cli: &Cli) -> Result<String, FeedError> {
    let config = Config::from_env_with_overrides(|key| cli.value_for(key))?;
    FeedService::new(FsLineReader::new()).produce_feed(&config)
}
