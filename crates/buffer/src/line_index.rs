// Chunk: docs/chunks/line_index - Gap-buffered line start offsets

//! Line index for tracking line boundaries in the character store.
//!
//! The index is itself a gap array of offsets. Line 0 always starts at offset
//! 0 and is not stored: entry `i` holds the start of line `i + 1`, i.e. the
//! offset just after the `i`-th line terminator.
//!
//! Appending at the end of the content records a new start with a single
//! write at the gap. Edits in the middle move the index gap to the edit point
//! so that only entries after it need shifting.

use crate::gap_array::GapArray;

/// Tracks line start offsets for O(1) line lookup.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Strictly increasing start offsets of lines 1, 2, ...
    starts: GapArray<usize>,
}

impl LineIndex {
    /// Creates an empty index with room for `capacity` recorded starts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            starts: GapArray::with_capacity(capacity),
        }
    }

    /// Returns the number of recorded line starts (one per terminator seen).
    pub fn recorded_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns the raw entry `i`, which is the start of line `i + 1`.
    pub fn entry(&self, i: usize) -> Option<usize> {
        self.starts.get(i)
    }

    /// Returns the start offset of `line`, or None if no such start is recorded.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            n => self.starts.get(n - 1),
        }
    }

    /// Returns the line containing the character at `offset`.
    ///
    /// An offset equal to a recorded start belongs to the line that starts there.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }

    /// Records a new line start at the index gap.
    ///
    /// No ordering validation is done; callers append the offset just after
    /// a terminator at the end of the recorded starts.
    pub fn add_line_start(&mut self, offset: usize) {
        self.starts.insert_at_gap(offset);
    }

    /// Moves the index gap so that every entry before it is `<= offset` and
    /// every entry after it is `> offset`.
    fn seek(&mut self, offset: usize) {
        let gap = self.starts.gap_position();
        let (before, after) = self.starts.as_slices();
        let left_ok = before.last().map_or(true, |&start| start <= offset);
        let right_ok = after.first().map_or(true, |&start| start > offset);
        if left_ok && right_ok {
            return;
        }

        let target = self.line_at_offset(offset);
        if target != gap {
            self.starts.relocate_gap(target);
        }
    }

    /// Updates the index for a non-terminator char inserted at `offset`.
    pub fn insert_char_at(&mut self, offset: usize) {
        self.seek(offset);
        for start in self.starts.after_gap_mut() {
            *start += 1;
        }
    }

    /// Updates the index for a line terminator inserted at `offset`.
    ///
    /// The new line starts at `offset + 1`; later starts shift by one.
    pub fn insert_newline_at(&mut self, offset: usize) {
        self.insert_char_at(offset);
        self.add_line_start(offset + 1);
    }

    /// Updates the index for the removal of the chars in `[start, end)`.
    ///
    /// Starts recorded for terminators inside the range are dropped; starts
    /// after the range shift left by its length.
    pub fn remove_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        self.seek(start);

        // A terminator at position p records p + 1, so (start, end] covers
        // exactly the terminators being removed.
        while let Some(first) = self.starts.as_slices().1.first().copied() {
            if first > end {
                break;
            }
            self.starts.delete_after_gap();
        }

        let removed = end - start;
        for line_start in self.starts.after_gap_mut() {
            *line_start -= removed;
        }
    }

    /// Rebuilds the index from the full content, keeping the allocation size.
    ///
    /// O(n) in the content length; used when loading text in bulk.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.starts = GapArray::with_capacity(self.starts.capacity());
        for (offset, ch) in content.into_iter().enumerate() {
            if ch == '\n' {
                self.add_line_start(offset + 1);
            }
        }
    }

    /// Returns all recorded starts in order (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn entries(&self) -> Vec<usize> {
        self.starts.to_vec()
    }
}
