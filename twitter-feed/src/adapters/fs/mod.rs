//! Filesystem adapter
//!
//! Reads input files from the local filesystem.

pub mod line_reader;

pub use line_reader::FsLineReader;
