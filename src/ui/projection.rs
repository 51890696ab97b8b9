//! Screen projection of an [`EditorState`].
//!
//! Rows are stored with raw tab bytes; on screen each tab takes
//! [`TAB_WIDTH`] columns. Every other byte takes exactly one column, so a
//! cursor column only needs correcting for the tabs in front of it.

use crate::editor::{EditorState, TAB_WIDTH};
use crate::input::keys::TAB;

/// Shown in place of bytes that have no printable single-column glyph.
pub const UNPRINTABLE: char = '?';

/// Render one stored row for display, expanding tabs.
///
/// Printable ASCII and Latin-1 bytes map to their own character; control
/// bytes and the soft hyphen (drawn zero columns wide) become
/// [`UNPRINTABLE`].
pub fn display_row(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            TAB => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            0x20..=0x7E | 0xA0..=0xAC | 0xAE..=0xFF => out.push(char::from(byte)),
            _ => out.push(UNPRINTABLE),
        }
    }
    out
}

/// Number of tab bytes in `row` before byte offset `col`.
pub fn tabs_before(row: &[u8], col: usize) -> usize {
    row.iter().take(col).filter(|&&b| b == TAB).count()
}

/// Zero-based screen column of byte offset `col` in `row`.
pub fn screen_column(row: &[u8], col: usize) -> usize {
    col + (TAB_WIDTH - 1) * tabs_before(row, col)
}

/// One-based terminal `(row, column)` for the hardware cursor.
///
/// The row is relative to the state's scroll offset; the column is the
/// raw byte column plus one, plus three for every tab before the cursor.
pub fn terminal_cursor(state: &EditorState) -> (usize, usize) {
    let cursor = state.cursor();
    let row = state.buffer().row(cursor.row).unwrap_or_default();
    (
        cursor.row.saturating_sub(state.scroll_top()) + 1,
        screen_column(row, cursor.col) + 1,
    )
}

/// Everything the screen needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Visible rows, tabs expanded, starting at the scroll offset.
    pub lines: Vec<String>,
    /// Zero-based `(x, y)` of the hardware cursor inside the text area.
    pub cursor: (u16, u16),
}

impl Projection {
    /// Project `state` onto a text area `height` rows tall.
    pub fn of(state: &EditorState, height: usize) -> Self {
        let lines = state
            .buffer()
            .rows()
            .skip(state.scroll_top())
            .take(height)
            .map(display_row)
            .collect();
        let (row, col) = terminal_cursor(state);
        Self {
            lines,
            cursor: (to_u16(col - 1), to_u16(row - 1)),
        }
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
