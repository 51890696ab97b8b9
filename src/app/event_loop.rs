use std::io::{self, ErrorKind, Read, Stderr, Sink, stdout};

use anyhow::{Context, Result};
use crossterm::cursor::SetCursorStyle;
use crossterm::execute;
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};
use tracing_subscriber::fmt::writer::EitherWriter;

use crate::app::{App, Message, Model, effects, input, update};
use crate::input::Decoder;

/// Owns the terminal while it is in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, so every way out of
/// [`App::run`] leaves the shell usable. Panics are covered by the hook
/// `ratatui::try_init` installs.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn init() -> Result<Self> {
        let terminal = ratatui::try_init()
            .context("Failed to initialize terminal; tined requires an interactive terminal")?;
        let guard = Self { terminal };
        // Insertion bar cursor, reset in Drop
        execute!(stdout(), SetCursorStyle::SteadyBar).context("Failed to set cursor style")?;
        tracing::debug!("terminal in raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
        ratatui::restore();
        tracing::debug!("terminal restored");
    }
}

/// Stderr log writer that discards output while the terminal is raw.
///
/// Anything written to stderr during a session would land on the
/// editor's screen.
pub fn stderr_log_writer() -> EitherWriter<Stderr, Sink> {
    stderr_unless_raw(crossterm::terminal::is_raw_mode_enabled().unwrap_or(true))
}

pub(super) fn stderr_unless_raw(raw_mode: bool) -> EitherWriter<Stderr, Sink> {
    if raw_mode {
        EitherWriter::B(io::sink())
    } else {
        EitherWriter::A(io::stderr())
    }
}

impl App {
    /// Run the editor until quit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or written, the
    /// terminal cannot be initialized, or reading input fails.
    pub fn run(&self) -> Result<()> {
        let editor = effects::load_editor_state(self.file_path.as_deref())?;

        let mut guard = TerminalGuard::init()?;
        let size = guard.terminal.size()?;
        let mut model = Model::new(editor, self.file_path.clone(), (size.width, size.height));

        let result = Self::event_loop(&mut guard.terminal, &mut model, &mut std::io::stdin().lock());
        drop(guard);
        result?;

        self.finish(&model)
    }

    /// Render, read one byte, update; repeat until the model asks to quit.
    pub(super) fn event_loop<B, R>(
        terminal: &mut Terminal<B>,
        model: &mut Model,
        reader: &mut R,
    ) -> Result<()>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
        R: Read,
    {
        let mut decoder = Decoder::new();
        let mut last_size = terminal.size()?;
        let mut byte = [0_u8; 1];

        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            let msg = match reader.read(&mut byte) {
                Ok(0) => Some(Message::EndOfInput),
                Ok(_) => input::message_for_byte(&mut decoder, byte[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => None,
                Err(err) => return Err(err).context("Failed to read input"),
            };

            let size = terminal.size()?;
            if let Some(resize) = input::message_for_size(last_size, size) {
                last_size = size;
                *model = update(std::mem::take(model), resize);
            }
            if let Some(msg) = msg {
                *model = update(std::mem::take(model), msg);
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
