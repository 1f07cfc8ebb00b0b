// Chunk: docs/chunks/gap_array - Gap array storage with a gap-buffered line index
// Chunk: docs/chunks/editor_core - Text editor over a character store and line index

//! gapedit-buffer: an in-memory text editing core.
//!
//! Text lives in a gap buffer of chars, and a second gap buffer of offsets
//! records where each line starts, so retrieving line N or its start offset
//! never scans the content.
//!
//! # Overview
//!
//! - [`GapArray`]: the generic gap buffer both stores are built on
//! - [`CharacterStore`]: `GapArray<char>`, one Unicode scalar value per slot
//! - [`LineIndex`]: line start offsets, entry `i` being the start of line `i + 1`
//! - [`TextEditor`]: composes the two and tracks the cursor
//!
//! # Example
//!
//! ```
//! use gapedit_buffer::{Position, TextEditor};
//!
//! let mut editor = TextEditor::new(100, 10);
//! editor.insert_str("Hello\nWorld\nGo Programming!");
//!
//! assert_eq!(editor.get_line(1).unwrap(), "World");
//! assert_eq!(editor.get_line_start(2).unwrap(), 12);
//! assert_eq!(editor.cursor_position(), Position::new(2, 15));
//!
//! // Edit in the middle: the gap moves to the edit point
//! editor.insert_at(5, '!').unwrap();
//! assert_eq!(editor.render(), "Hello!\nWorld\nGo Programming!");
//! ```
//!
//! # Line addressing
//!
//! With [`LineAddressing::IncludeTrailing`] (the default) the content after
//! the last terminator is a line of its own, and an empty buffer has no
//! lines. [`LineAddressing::TerminatedOnly`] only addresses lines that end in
//! a terminator.

mod character_store;
mod config;
mod error;
mod gap_array;
pub mod grapheme;
mod line_index;
mod text_editor;
mod types;

pub use character_store::CharacterStore;
pub use config::{EditorConfig, DEFAULT_CHAR_CAPACITY, DEFAULT_LINE_CAPACITY};
pub use error::{ConfigError, EditorError, EditorResult};
pub use gap_array::GapArray;
pub use line_index::LineIndex;
pub use text_editor::{TextEditor, LINE_TERMINATOR};
pub use types::{LineAddressing, Position};
