//! The editing core: a line buffer of raw bytes, a cursor, and the pure
//! state transitions that tie them together.
//!
//! Nothing in this module touches a terminal or a file descriptor. Each
//! transition takes an [`EditorState`] by value and returns the next one.

mod buffer;
mod cursor;
mod state;

pub use buffer::{LineBuffer, Row};
pub use cursor::{Cursor, TAB_WIDTH};
pub use state::EditorState;
