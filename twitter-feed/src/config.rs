use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable holding the path to the follow-relationship file
pub const ENV_USER_FILE_PATH: &str = "USER_FILE_PATH";
/// Environment variable holding the path to the message file
pub const ENV_TWEET_FILE_PATH: &str = "TWEET_FILE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the follow-relationship ("user") file
    pub user_file_path: PathBuf,
    /// Path to the message ("tweet") file
    pub tweet_file_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the process environment, after loading
    /// any `.env` file in the working directory. Values returned by
    /// `overrides` (command-line flags) take precedence over both.
    pub fn from_env_with_overrides<F>(overrides: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| overrides(key).or_else(|| env::var(key).ok()))
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// Every value is mandatory; a value that is unset or blank is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            user_file_path: required(&lookup, ENV_USER_FILE_PATH)?,
            tweet_file_path: required(&lookup, ENV_TWEET_FILE_PATH)?,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    tracing::debug!(key, "Parsing configuration value");

    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            tracing::debug!(key, value = %value, "Extracted configuration value");
            Ok(PathBuf::from(value))
        }
        _ => Err(ConfigError::Missing {
            key: key.to_string(),
        }),
    }
}
