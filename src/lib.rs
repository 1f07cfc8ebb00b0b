// Chunk: docs/chunks/demo_driver - Sample typing session over the editing core

//! gapedit: a small driver over [`gapedit_buffer`].
//!
//! Types a piece of text into a fresh editor, one symbol at a time, and
//! reports a chosen line alongside the full rendered buffer.

use gapedit_buffer::{EditorConfig, EditorResult, Position, TextEditor};

/// Text typed by the demo binary.
pub const SAMPLE_TEXT: &str = "Hello\nWorld\nGo Programming!";

/// What a demo run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Content of the requested line.
    pub line: String,
    /// The whole buffer.
    pub rendered: String,
    pub cursor: Position,
    pub line_count: usize,
}

/// Types `text` into a new editor built from `config` and reads back `line`.
pub fn run_demo(config: &EditorConfig, text: &str, line: usize) -> EditorResult<DemoReport> {
    let mut editor = TextEditor::with_config(config);
    for symbol in text.chars() {
        editor.insert(symbol);
    }
    log::info!(
        "typed {} chars over {} lines",
        editor.len(),
        editor.line_count()
    );

    Ok(DemoReport {
        line: editor.get_line(line)?,
        rendered: editor.render(),
        cursor: editor.cursor_position(),
        line_count: editor.line_count(),
    })
}
