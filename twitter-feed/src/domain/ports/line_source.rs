//! Line source port
//!
//! Defines how the pipeline obtains the raw lines of an input file.
//! Implementations are provided by adapters (e.g., the local filesystem).

use std::path::Path;

use crate::error::ReadError;

/// Source of raw input lines
pub trait LineSource {
    /// Read the file at `path` into its ordered lines, without line terminators.
    ///
    /// An empty file yields an empty vector. A missing or unreadable file is an error.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError>;
}
