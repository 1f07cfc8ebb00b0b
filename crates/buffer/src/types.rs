// Chunk: docs/chunks/editor_core - Cursor position and line addressing policy

use serde::{Deserialize, Serialize};

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Columns count chars (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// Which lines `get_line` and `get_line_start` treat as addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineAddressing {
    /// Every line is addressable, including the content after the last
    /// terminator (which may be empty). An empty buffer has no lines.
    #[default]
    IncludeTrailing,
    /// Only lines closed by a terminator are addressable.
    TerminatedOnly,
}

impl LineAddressing {
    /// Returns the number of addressable lines for a buffer of `content_len`
    /// chars with `terminators` recorded line terminators.
    pub fn line_count(self, content_len: usize, terminators: usize) -> usize {
        match self {
            LineAddressing::IncludeTrailing if content_len == 0 => 0,
            LineAddressing::IncludeTrailing => terminators + 1,
            LineAddressing::TerminatedOnly => terminators,
        }
    }
}
