use std::path::PathBuf;

use crate::editor::EditorState;
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// Wraps the editor state with what the host needs around it: the file
/// the buffer is bound to, whether it has unsaved edits, and the
/// viewport that decides the scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Buffer, cursor and scroll offset
    pub editor: EditorState,
    /// Visible window over the buffer
    pub viewport: Viewport,
    /// File the buffer was loaded from and is written back to
    pub file_path: Option<PathBuf>,
    /// Set by the first edit that changes the buffer
    pub modified: bool,
    /// Set when the quit command is received
    pub should_quit: bool,
}

impl Model {
    /// Create a model for a terminal of `terminal_size` (width, height).
    ///
    /// The bottom terminal row is reserved for the status bar.
    pub fn new(editor: EditorState, file_path: Option<PathBuf>, terminal_size: (u16, u16)) -> Self {
        let total_lines = editor.buffer().len();
        let mut model = Self {
            editor,
            viewport: Viewport::new(terminal_size.1.saturating_sub(1), total_lines),
            file_path,
            modified: false,
            should_quit: false,
        };
        model.follow_cursor();
        model
    }

    /// Resize the viewport to a new terminal height.
    pub fn resize(&mut self, height: u16) {
        self.viewport.resize(height.saturating_sub(1));
        self.follow_cursor();
    }

    /// Scroll so the cursor row is visible and record the offset in the
    /// editor state.
    pub fn follow_cursor(&mut self) {
        self.viewport.set_total_lines(self.editor.buffer().len());
        self.viewport.follow(self.editor.cursor().row);
        let editor = std::mem::take(&mut self.editor);
        self.editor = editor.with_scroll_top(self.viewport.offset());
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorState::new(), None, (80, 24))
    }
}
