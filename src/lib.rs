// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorState)
    clippy::module_name_repetitions
)]

//! # Tined
//!
//! A tiny byte-driven terminal text editor.
//!
//! Tined edits a buffer of raw byte rows:
//! - Control-code keybindings (Ctrl-A/E/B/F/P/N/K, Backspace, Enter)
//! - Left/right arrow keys via `ESC [ C` / `ESC [ D`
//! - Tabs stored as bytes, shown four columns wide
//! - Optional write-back to the file on quit
//!
//! ## Architecture
//!
//! Tined uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! The editing core underneath is a value algebra: every operation takes
//! an [`editor::EditorState`] and returns a new one, sharing unchanged rows.
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Line buffer, cursor and editor state
//! - [`input`]: Byte dispatch and escape-sequence matching
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Cursor, EditorState, LineBuffer};
    pub use crate::input::{Command, Decoder, Quit};
    pub use crate::ui::viewport::Viewport;
}
