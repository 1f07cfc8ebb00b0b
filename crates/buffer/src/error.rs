// Chunk: docs/chunks/editor_errors - Typed editor and config errors

use std::path::PathBuf;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors returned by [`TextEditor`](crate::TextEditor) queries and positional edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("invalid line number {line}: buffer has {line_count} addressable lines")]
    InvalidLineNumber { line: usize, line_count: usize },

    #[error("offset {offset} is out of bounds for buffer of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("column {col} is past the end of line {line} (length {line_len})")]
    ColumnOutOfBounds {
        line: usize,
        col: usize,
        line_len: usize,
    },

    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },
}

/// Errors raised while loading an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
