/// Visual width of a tab stop, in columns.
pub const TAB_WIDTH: usize = 4;

/// Cursor position in the editor buffer.
///
/// A plain value with no knowledge of the buffer: `right` and `down` are
/// never clamped here, keeping the cursor inside the text is the job of
/// [`EditorState`](super::EditorState).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column (byte offset within the row). May equal the row
    /// length, meaning "after the last byte".
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at row 0, column 0.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One column left, stopping at column 0.
    pub const fn left(self) -> Self {
        Self::at(self.row, self.col.saturating_sub(1))
    }

    /// One tab stop left, stopping at column 0.
    pub const fn left_tab(self) -> Self {
        Self::at(self.row, self.col.saturating_sub(TAB_WIDTH))
    }

    /// One column right.
    pub const fn right(self) -> Self {
        Self::at(self.row, self.col + 1)
    }

    /// One tab stop right.
    pub const fn right_tab(self) -> Self {
        Self::at(self.row, self.col + TAB_WIDTH)
    }

    /// One row up, stopping at row 0.
    pub const fn up(self) -> Self {
        Self::at(self.row.saturating_sub(1), self.col)
    }

    /// One row down.
    pub const fn down(self) -> Self {
        Self::at(self.row + 1, self.col)
    }

    /// Column 0 of the same row.
    pub const fn beginning_of_line(self) -> Self {
        Self::at(self.row, 0)
    }

    /// Column 0 of the next row.
    pub const fn down_beginning_of_line(self) -> Self {
        Self::at(self.row + 1, 0)
    }
}
