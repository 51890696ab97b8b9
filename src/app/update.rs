use crate::app::Model;
use crate::editor::EditorState;
use crate::input::{Command, Quit};

/// All possible events in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A decoded editing command
    Edit(Command),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// The input feed closed
    EndOfInput,
}

/// Pure state transition.
///
/// Applies `msg` to `model` and returns the next model. Never touches the
/// terminal or the file system.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Edit(command) => {
            tracing::trace!(?command, cursor = ?model.editor.cursor(), "dispatch");
            match command.apply(model.editor.clone()) {
                Ok(editor) => {
                    if command.is_edit() && buffer_changed(&model, &editor) {
                        model.modified = true;
                    }
                    model.editor = editor;
                    model.follow_cursor();
                }
                Err(Quit) => {
                    tracing::debug!(modified = model.modified, "quit requested");
                    model.should_quit = true;
                }
            }
        }
        Message::Resize(width, height) => {
            model.resize(height);
            tracing::debug!(width, height, text_rows = model.viewport.height(), "resize");
        }
        Message::EndOfInput => {
            tracing::info!("input closed");
            model.should_quit = true;
        }
    }
    model
}

fn buffer_changed(model: &Model, next: &EditorState) -> bool {
    let before = model.editor.buffer();
    let after = next.buffer();
    !after.is_same_as(before) && after != before
}
