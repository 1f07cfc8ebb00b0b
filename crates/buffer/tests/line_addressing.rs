// Chunk: docs/chunks/line_index - Gap-buffered line start offsets

//! Line addressing under both policies.
//!
//! `IncludeTrailing` treats the content after the last terminator as a line;
//! `TerminatedOnly` addresses only lines closed by a terminator.

use gapedit_buffer::{EditorConfig, EditorError, LineAddressing, TextEditor};
use pretty_assertions::assert_eq;

fn typed(text: &str, line_addressing: LineAddressing) -> TextEditor {
    let config = EditorConfig {
        line_addressing,
        ..EditorConfig::default()
    };
    let mut editor = TextEditor::with_config(&config);
    editor.insert_str(text);
    editor
}

fn invalid(line: usize, line_count: usize) -> EditorError {
    EditorError::InvalidLineNumber { line, line_count }
}

// ==================== IncludeTrailing ====================

#[test]
fn include_trailing_sample_lines() {
    let editor = typed("Hello\nWorld\nGo Programming!", LineAddressing::IncludeTrailing);

    assert_eq!(editor.line_count(), 3);
    assert_eq!(editor.get_line(0).unwrap(), "Hello");
    assert_eq!(editor.get_line(1).unwrap(), "World");
    assert_eq!(editor.get_line(2).unwrap(), "Go Programming!");
    assert_eq!(editor.get_line_start(0), Ok(0));
    assert_eq!(editor.get_line_start(1), Ok(6));
    assert_eq!(editor.get_line_start(2), Ok(12));
    assert_eq!(editor.get_line(3), Err(invalid(3, 3)));
}

#[test]
fn include_trailing_empty_buffer_has_no_line_zero() {
    let editor = typed("", LineAddressing::IncludeTrailing);
    assert_eq!(editor.get_line(0), Err(invalid(0, 0)));
    assert_eq!(editor.get_line_start(0), Err(invalid(0, 0)));
}

#[test]
fn include_trailing_single_line() {
    let editor = typed("Hello", LineAddressing::IncludeTrailing);
    assert_eq!(editor.get_line(0).unwrap(), "Hello");
    assert_eq!(editor.get_line(1), Err(invalid(1, 1)));
}

#[test]
fn include_trailing_lone_terminator_gives_two_empty_lines() {
    let editor = typed("\n", LineAddressing::IncludeTrailing);
    assert_eq!(editor.line_count(), 2);
    assert_eq!(editor.get_line(0).unwrap(), "");
    assert_eq!(editor.get_line(1).unwrap(), "");
    assert_eq!(editor.get_line_start(1), Ok(1));
}

// ==================== TerminatedOnly ====================

#[test]
fn terminated_only_drops_partial_last_line() {
    let editor = typed("Hello\nWorld\nGo Programming!", LineAddressing::TerminatedOnly);

    assert_eq!(editor.line_count(), 2);
    assert_eq!(editor.get_line(0).unwrap(), "Hello");
    assert_eq!(editor.get_line(1).unwrap(), "World");
    assert_eq!(editor.get_line(2), Err(invalid(2, 2)));
    assert_eq!(editor.get_line_start(2), Err(invalid(2, 2)));
}

#[test]
fn terminated_only_unterminated_text_has_no_lines() {
    let editor = typed("Hello", LineAddressing::TerminatedOnly);
    assert_eq!(editor.get_line(0), Err(invalid(0, 0)));
    assert_eq!(editor.get_line(1), Err(invalid(1, 0)));
}

#[test]
fn terminated_only_fully_terminated_text() {
    let editor = typed("a\nb\n", LineAddressing::TerminatedOnly);
    assert_eq!(editor.line_count(), 2);
    assert_eq!(editor.get_line(1).unwrap(), "b");
    assert_eq!(editor.get_line(2), Err(invalid(2, 2)));
}

// ==================== Switching ====================

#[test]
fn policy_only_changes_addressability() {
    let mut editor = typed("one\ntwo", LineAddressing::IncludeTrailing);
    assert_eq!(editor.get_line(1).unwrap(), "two");

    editor.set_line_addressing(LineAddressing::TerminatedOnly);
    assert_eq!(editor.get_line(1), Err(invalid(1, 1)));
    assert_eq!(editor.render(), "one\ntwo");

    editor.insert('\n');
    assert_eq!(editor.get_line(1).unwrap(), "two");
}
