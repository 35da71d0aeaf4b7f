//! Unified error types for the Twitter feed pipeline
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Missing or blank configuration values
//! - `ReadError`: Input file could not be read (line source errors)
//! - `DataError`: Input data violates its grammar, or no feed can be built
//! - `FeedError`: Pipeline errors (wraps the above for the entry point)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors - raised before any input is read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Value not set for configuration key - {key}")]
    Missing { key: String },
}

/// Line source errors
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("File {} is not readable: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Data errors - the input content itself is unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("User record on line {line} does not conform to pattern. Record: {record}")]
    MalformedFollow { line: usize, record: String },

    #[error("Tweet record on line {line} does not conform to pattern. Record: {record}")]
    MalformedTweet { line: usize, record: String },

    #[error("No Twitter users found so no feed can be produced")]
    NoUsers,
}

/// Pipeline errors - returned by the feed service
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}
