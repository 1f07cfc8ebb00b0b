// Chunk: docs/chunks/editor_core - Text editor over a character store and line index

//! TextEditor is the main public API for text editing operations.
//!
//! It combines a character store (a gap array of chars) with a line index (a
//! gap array of line start offsets) and tracks the cursor as (line, column).
//!
//! The cursor always sits at the character store's gap, so typing at the
//! cursor is a write at the gap plus, for a line terminator, one recorded
//! line start. Positional edits first move the gap (and the cursor) to the
//! edit point.

use crate::character_store::CharacterStore;
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::grapheme;
use crate::line_index::LineIndex;
use crate::types::{LineAddressing, Position};

/// The only line terminator recognised by the line index.
pub const LINE_TERMINATOR: char = '\n';

/// A text editor with cursor tracking and O(1) line lookup.
#[derive(Debug)]
pub struct TextEditor {
    chars: CharacterStore,
    lines: LineIndex,
    /// Position of the character store's gap.
    cursor: Position,
    line_addressing: LineAddressing,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextEditor {
    /// Creates an empty editor with the given initial capacities.
    pub fn new(initial_char_capacity: usize, initial_line_capacity: usize) -> Self {
        Self {
            chars: CharacterStore::with_capacity(initial_char_capacity),
            lines: LineIndex::with_capacity(initial_line_capacity),
            cursor: Position::default(),
            line_addressing: LineAddressing::default(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates an empty editor from a config.
    pub fn with_config(config: &EditorConfig) -> Self {
        let mut editor = Self::new(config.initial_char_capacity, config.initial_line_capacity);
        editor.line_addressing = config.line_addressing;
        editor
    }

    /// Creates an editor holding `text`, with the cursor at the end.
    pub fn from_text(text: &str, config: &EditorConfig) -> Self {
        let chars = CharacterStore::from_text(text, config.initial_char_capacity);
        let mut lines = LineIndex::with_capacity(config.initial_line_capacity);
        lines.rebuild(chars.iter());

        let mut editor = Self {
            chars,
            lines,
            cursor: Position::default(),
            line_addressing: config.line_addressing,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        };
        editor.cursor = editor.position_at(editor.chars.len());
        editor
    }

    // ==================== Accessors ====================

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    pub fn cursor_line(&self) -> usize {
        self.cursor.line
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor.col
    }

    /// Returns the cursor as a char offset into the content.
    pub fn cursor_offset(&self) -> usize {
        self.chars.gap_position()
    }

    /// Returns the total char count.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn line_addressing(&self) -> LineAddressing {
        self.line_addressing
    }

    pub fn set_line_addressing(&mut self, line_addressing: LineAddressing) {
        self.line_addressing = line_addressing;
    }

    /// Returns the number of line terminators recorded so far.
    pub fn recorded_line_starts(&self) -> usize {
        self.lines.recorded_count()
    }

    /// Returns the number of lines `get_line` accepts under the current
    /// line addressing policy.
    pub fn line_count(&self) -> usize {
        self.line_addressing
            .line_count(self.chars.len(), self.lines.recorded_count())
    }

    // ==================== Line queries ====================

    /// Returns the char offset where `line` starts.
    ///
    /// Line 0 starts at 0 by convention; other starts come from the index.
    pub fn get_line_start(&self, line: usize) -> EditorResult<usize> {
        let line_count = self.line_count();
        let invalid = EditorError::InvalidLineNumber { line, line_count };
        if line >= line_count {
            log::debug!("rejected line {} of {}", line, line_count);
            return Err(invalid);
        }
        self.lines.line_start(line).ok_or(invalid)
    }

    /// Returns the content of `line`, without its terminator.
    pub fn get_line(&self, line: usize) -> EditorResult<String> {
        let start = self.get_line_start(line)?;
        let end = self.physical_line_end(line);
        Ok(self.chars.slice(start, end))
    }

    /// Returns the full content with the gap omitted.
    pub fn render(&self) -> String {
        self.chars.to_string()
    }

    /// End offset of a line regardless of addressing policy: the position
    /// of its terminator, or the content length for the last line.
    fn physical_line_end(&self, line: usize) -> usize {
        match self.lines.line_start(line + 1) {
            Some(next) => next - 1,
            None => self.chars.len(),
        }
    }

    /// Number of lines in the content, counting the one after the last
    /// terminator even when it is empty.
    fn physical_line_count(&self) -> usize {
        self.lines.recorded_count() + 1
    }

    fn physical_line_len(&self, line: usize) -> usize {
        let start = self.lines.line_start(line).unwrap_or(0);
        self.physical_line_end(line) - start
    }

    // ==================== Cursor movement ====================

    /// Converts a char offset to a (line, column) position.
    fn position_at(&self, offset: usize) -> Position {
        let line = self.lines.line_at_offset(offset);
        let start = self.lines.line_start(line).unwrap_or(0);
        Position::new(line, offset - start)
    }

    /// Converts a (line, column) position to a char offset.
    pub fn offset_of(&self, pos: Position) -> EditorResult<usize> {
        let line_count = self.physical_line_count();
        if pos.line >= line_count {
            return Err(EditorError::InvalidLineNumber {
                line: pos.line,
                line_count,
            });
        }
        let line_len = self.physical_line_len(pos.line);
        if pos.col > line_len {
            return Err(EditorError::ColumnOutOfBounds {
                line: pos.line,
                col: pos.col,
                line_len,
            });
        }
        let start = self.lines.line_start(pos.line).unwrap_or(0);
        Ok(start + pos.col)
    }

    fn check_offset(&self, offset: usize) -> EditorResult<()> {
        let len = self.chars.len();
        if offset > len {
            return Err(EditorError::OffsetOutOfBounds { offset, len });
        }
        Ok(())
    }

    /// Moves the cursor (and the gap) to a char offset.
    pub fn move_cursor_to_offset(&mut self, offset: usize) -> EditorResult<()> {
        self.check_offset(offset)?;
        if offset != self.chars.gap_position() {
            self.chars.relocate_gap(offset);
            self.cursor = self.position_at(offset);
        }
        Ok(())
    }

    /// Moves the cursor to `pos`, clamped to valid bounds.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.physical_line_count() - 1);
        let col = pos.col.min(self.physical_line_len(line));
        let start = self.lines.line_start(line).unwrap_or(0);
        self.chars.relocate_gap(start + col);
        self.cursor = Position::new(line, col);
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies that the incremental line index matches
    /// a fresh rebuild from the content, and that the cursor matches the gap.
    ///
    /// Checks on power-of-two mutation counts and then every 1024th, so the
    /// O(n) rebuild stays out of tight loops.
    #[cfg(debug_assertions)]
    fn assert_consistent(&mut self) {
        self.debug_mutation_count += 1;
        let n = self.debug_mutation_count;
        if !n.is_power_of_two() && n % 1024 != 0 {
            return;
        }
        let mut expected = LineIndex::with_capacity(self.lines.recorded_count());
        expected.rebuild(self.chars.iter());
        assert_eq!(
            self.lines.entries(),
            expected.entries(),
            "line index drift detected after {} mutations (len {})",
            self.debug_mutation_count,
            self.chars.len(),
        );
        assert_eq!(
            self.cursor,
            self.position_at(self.chars.gap_position()),
            "cursor drifted from the gap"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_consistent(&mut self) {}

    // ==================== Insertion ====================

    /// Inserts `symbol` at the cursor.
    ///
    /// For a line terminator the offset just after it is recorded as a new
    /// line start, the cursor moves to the next line and the column resets;
    /// any other symbol advances the column. O(1) amortized when typing at
    /// the end of the content.
    pub fn insert(&mut self, symbol: char) {
        let offset = self.chars.gap_position();
        self.chars.insert_at_gap(symbol);

        if symbol == LINE_TERMINATOR {
            self.lines.insert_newline_at(offset);
            self.cursor.line += 1;
            self.cursor.col = 0;
        } else {
            self.lines.insert_char_at(offset);
            self.cursor.col += 1;
        }

        self.assert_consistent();
    }

    /// Inserts each char of `text` at the cursor, in order.
    pub fn insert_str(&mut self, text: &str) {
        for symbol in text.chars() {
            self.insert(symbol);
        }
    }

    /// Inserts `symbol` at a char offset, leaving the cursor just after it.
    pub fn insert_at(&mut self, offset: usize, symbol: char) -> EditorResult<()> {
        self.move_cursor_to_offset(offset)?;
        self.insert(symbol);
        Ok(())
    }

    // ==================== Deletion ====================

    /// Deletes the char before the cursor (Backspace).
    ///
    /// Returns the deleted char, or None at the start of the buffer.
    pub fn delete_backward(&mut self) -> Option<char> {
        let deleted = self.chars.delete_before_gap()?;
        let offset = self.chars.gap_position();
        self.lines.remove_range(offset, offset + 1);

        if deleted == LINE_TERMINATOR {
            // Joined onto the end of the previous line
            self.cursor = self.position_at(offset);
        } else {
            self.cursor.col -= 1;
        }

        self.assert_consistent();
        Some(deleted)
    }

    /// Deletes the char after the cursor (Delete key).
    ///
    /// Returns the deleted char, or None at the end of the buffer. The cursor
    /// does not move.
    pub fn delete_forward(&mut self) -> Option<char> {
        let deleted = self.chars.delete_after_gap()?;
        let offset = self.chars.gap_position();
        self.lines.remove_range(offset, offset + 1);

        self.assert_consistent();
        Some(deleted)
    }

    /// Deletes the chars in `[start, end)` and leaves the cursor at `start`.
    ///
    /// Returns the deleted text.
    pub fn delete_range(&mut self, start: usize, end: usize) -> EditorResult<String> {
        if start > end {
            return Err(EditorError::InvalidRange { start, end });
        }
        self.check_offset(end)?;

        let deleted = self.chars.slice(start, end);
        self.move_cursor_to_offset(start)?;
        for _ in start..end {
            self.chars.delete_after_gap();
        }
        self.lines.remove_range(start, end);

        self.assert_consistent();
        Ok(deleted)
    }

    /// Deletes the grapheme cluster before the cursor.
    ///
    /// At the start of a line this deletes the preceding terminator, joining
    /// the lines. Returns the deleted text, or None at the start of the buffer.
    pub fn delete_grapheme_backward(&mut self) -> Option<String> {
        if self.cursor.col == 0 {
            return self.delete_backward().map(String::from);
        }

        let offset = self.chars.gap_position();
        let line_start = offset - self.cursor.col;
        let before: Vec<char> = self.chars.range_iter(line_start, offset).collect();
        let cluster = grapheme::cluster_len_before(&before);
        self.delete_range(offset - cluster, offset).ok()
    }

    /// Deletes the grapheme cluster after the cursor.
    ///
    /// At the end of a line this deletes its terminator, joining the lines.
    /// Returns the deleted text, or None at the end of the buffer.
    pub fn delete_grapheme_forward(&mut self) -> Option<String> {
        let offset = self.chars.gap_position();
        let line_end = self.physical_line_end(self.cursor.line);
        if offset >= line_end {
            return self.delete_forward().map(String::from);
        }

        let after: Vec<char> = self.chars.range_iter(offset, line_end).collect();
        let cluster = grapheme::cluster_len_at(&after);
        self.delete_range(offset, offset + cluster).ok()
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}
