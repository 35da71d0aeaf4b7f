//! Filesystem line reader

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::LineSource;
use crate::error::ReadError;

/// Reads UTF-8 text files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineReader;

impl FsLineReader {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for FsLineReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError> {
        tracing::debug!(path = %path.display(), "Checking if file exists");
        match fs::metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ReadError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(ReadError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        tracing::debug!(path = %path.display(), "Reading data in file");
        let content = fs::read_to_string(path).map_err(|source| ReadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }
}
