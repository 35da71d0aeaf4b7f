//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::LineSource;
use crate::error::ReadError;

// ============================================================================
// In-Memory Line Source
// ============================================================================

/// Serves preconfigured lines per path; unknown paths are `NotFound`
#[derive(Default)]
pub struct InMemoryLineSource {
    files: HashMap<PathBuf, Vec<String>>,
    unreadable: Vec<PathBuf>,
}

impl InMemoryLineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file with lines
    pub fn with_file<P, I, S>(mut self, path: P, lines: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files
            .insert(path.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// Make a path fail as if it existed but could not be read
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.push(path.into());
        self
    }
}

impl LineSource for InMemoryLineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(ReadError::Unreadable {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                ),
            });
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::NotFound {
                path: path.to_path_buf(),
            })
    }
}
