use super::{Cursor, LineBuffer};

/// The editor's complete editing state: buffer, cursor and scroll offset.
///
/// Every operation consumes the state and returns the next one. Starting
/// from a state whose cursor row exists, every operation yields a state
/// whose cursor row exists and whose column lies in `0..=row_len`.
///
/// `scroll_top` is carried through edits unchanged; keeping the cursor on
/// screen is the render layer's job (see [`Viewport`](crate::ui::viewport::Viewport)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    buffer: LineBuffer,
    cursor: Cursor,
    scroll_top: usize,
}

impl EditorState {
    /// A single empty row with the cursor at the origin.
    pub fn new() -> Self {
        Self::from_buffer(LineBuffer::single_empty_row())
    }

    /// Wrap an existing buffer, cursor at the origin.
    ///
    /// A buffer with no rows is replaced by a single empty row so the
    /// cursor always addresses a real row.
    pub fn from_buffer(buffer: LineBuffer) -> Self {
        let buffer = if buffer.is_empty() {
            LineBuffer::single_empty_row()
        } else {
            buffer
        };
        Self {
            buffer,
            cursor: Cursor::new(),
            scroll_top: 0,
        }
    }

    /// Replace the cursor.
    ///
    /// The caller is responsible for passing a position inside the buffer.
    pub const fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// Replace the scroll offset.
    pub const fn with_scroll_top(mut self, scroll_top: usize) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    pub const fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    fn current_row_len(&self) -> usize {
        self.buffer.row_len(self.cursor.row)
    }

    fn with(mut self, buffer: LineBuffer, cursor: Cursor) -> Self {
        self.buffer = buffer;
        self.cursor = cursor;
        self
    }

    /// Insert `byte` at the cursor and step past it.
    pub fn write(self, byte: u8) -> Self {
        let buffer = self
            .buffer
            .insert_character_at(self.cursor.row, self.cursor.col, byte);
        let cursor = self.cursor.right();
        self.with(buffer, cursor)
    }

    pub fn move_left(mut self) -> Self {
        self.cursor = self.cursor.left();
        self
    }

    /// One column right; no-op at the end of the row.
    pub fn move_right(mut self) -> Self {
        if self.cursor.col < self.current_row_len() {
            self.cursor = self.cursor.right();
        }
        self
    }

    /// One row up, clamping the column to the target row's length.
    pub fn move_up(mut self) -> Self {
        if self.cursor.row == 0 {
            return self;
        }
        let target = self.cursor.up();
        let len = self.buffer.row_len(target.row);
        self.cursor = Cursor::at(target.row, target.col.min(len));
        self
    }

    /// One row down, clamping the column; no-op on the last row.
    pub fn move_down(mut self) -> Self {
        if self.cursor.row + 1 >= self.buffer.len() {
            return self;
        }
        let target = self.cursor.down();
        let len = self.buffer.row_len(target.row);
        self.cursor = Cursor::at(target.row, target.col.min(len));
        self
    }

    pub fn move_to_beginning_of_line(mut self) -> Self {
        self.cursor = self.cursor.beginning_of_line();
        self
    }

    pub fn move_to_end_of_line(mut self) -> Self {
        self.cursor = Cursor::at(self.cursor.row, self.current_row_len());
        self
    }

    /// Break the line at the cursor and move to the start of the new row.
    ///
    /// On an empty row or at the end of a row a fresh empty row is
    /// inserted below; mid-row, the bytes after the cursor move down.
    pub fn newline(mut self) -> Self {
        if self.buffer.is_empty() {
            self.buffer = LineBuffer::single_empty_row();
        }
        let Cursor { row, col } = self.cursor;
        let len = self.current_row_len();
        let cursor = self.cursor.down_beginning_of_line();
        if len == 0 || col >= len {
            let buffer = self.buffer.insert_row_at(row + 1);
            return self.with(buffer, cursor);
        }
        let buffer = self.buffer.move_after_to_new_row(row, col);
        self.with(buffer, cursor)
    }

    /// Delete the byte left of the cursor.
    ///
    /// At column 0 the current row is joined onto the end of the previous
    /// row and the cursor lands at the join point. No-op at the origin.
    pub fn backspace(self) -> Self {
        let Cursor { row, col } = self.cursor;
        if let Some(left) = col.checked_sub(1) {
            let buffer = self.buffer.remove_character_at(row, left);
            let cursor = self.cursor.left();
            return self.with(buffer, cursor);
        }
        if row == 0 {
            return self;
        }
        let previous = row - 1;
        let cursor = Cursor::at(previous, self.buffer.row_len(previous));
        let buffer = self.buffer.join_with_previous(row);
        self.with(buffer, cursor)
    }

    /// Kill to the end of the line, or kill the whole line at column 0.
    ///
    /// Killing a line other than the first moves the cursor to the end of
    /// the row above. Killing the only row leaves one empty row.
    pub fn trim_line(self) -> Self {
        let cursor = self.cursor;
        let Cursor { row, col } = cursor;
        if col > 0 {
            let buffer = self.buffer.trim_row_at(row, col);
            return self.with(buffer, cursor);
        }
        if self.buffer.len() <= 1 {
            return self.with(LineBuffer::single_empty_row(), Cursor::new());
        }
        let buffer = self.buffer.remove_row_at(row);
        if row == 0 {
            return self.with(buffer, cursor);
        }
        let previous = row - 1;
        let cursor = Cursor::at(previous, buffer.row_len(previous));
        self.with(buffer, cursor)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
