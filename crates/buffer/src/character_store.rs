// Chunk: docs/chunks/gap_array - Generic gap array with doubling growth

//! Character storage for the editor body.
//!
//! Each slot holds one Unicode scalar value, so a multi-byte symbol such as
//! `'こ'` or `'🌍'` occupies exactly one slot and is never split.

use std::fmt;

use crate::gap_array::GapArray;

/// The editable text body: a gap array of chars.
pub type CharacterStore = GapArray<char>;

impl GapArray<char> {
    /// Creates a store holding `text` with `extra_capacity` free slots.
    pub fn from_text(text: &str, extra_capacity: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::from_slice(&chars, extra_capacity)
    }

    /// Returns the logical range `[start, end)` as a String.
    ///
    /// Out-of-range bounds are clamped; an inverted range yields "".
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.range_iter(start, end).collect()
    }
}

impl fmt::Display for GapArray<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (before, after) = self.as_slices();
        for ch in before.iter().chain(after) {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
