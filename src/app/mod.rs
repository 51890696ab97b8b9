//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Terminal setup, the blocking read loop and rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use event_loop::stderr_log_writer;
pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone, Default)]
pub struct App {
    file_path: Option<PathBuf>,
    write_on_quit: bool,
}

impl App {
    /// Create a new application, optionally bound to a file.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            write_on_quit: false,
        }
    }

    /// Write a modified buffer back to its file on quit.
    pub const fn with_write_on_quit(mut self, enabled: bool) -> Self {
        self.write_on_quit = enabled;
        self
    }
}
