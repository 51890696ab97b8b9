//! Byte-level input dispatch.
//!
//! The input feed is a stream of raw bytes from a terminal in raw mode.
//! - [`keys`]: the control-code alphabet
//! - [`command_for_byte`]: the fixed byte-to-command table
//! - [`dispatch`]: apply one byte to an [`EditorState`]
//! - [`EscapeMatcher`] / [`Decoder`]: arrow-key sequence recognition, one
//!   byte at a time

mod escape;
pub mod keys;

pub use escape::{Decoder, EscapeMatcher, Feed};

use thiserror::Error;

use crate::editor::EditorState;
use keys::{ACK, BS, CR, DEL, DLE, ENQ, ETX, LF, SO, SOH, STX, VT};

/// Returned in place of a new state when the quit byte is seen.
///
/// This is the editor's only terminal condition. The host should stop
/// reading, restore the terminal and exit cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quit requested")]
pub struct Quit;

/// A single editing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a literal byte at the cursor
    Write(u8),
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Move to column 0
    LineStart,
    /// Move past the last byte of the row
    LineEnd,
    /// Break the line at the cursor
    Newline,
    /// Delete left of the cursor, joining rows at column 0
    Backspace,
    /// Kill to end of line, or kill the line at column 0
    TrimLine,
    /// Stop the editor
    Quit,
}

impl Command {
    /// Apply the command to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Quit`] for [`Command::Quit`]; every other command succeeds.
    pub fn apply(self, state: EditorState) -> Result<EditorState, Quit> {
        Ok(match self {
            Self::Write(byte) => state.write(byte),
            Self::MoveLeft => state.move_left(),
            Self::MoveRight => state.move_right(),
            Self::MoveUp => state.move_up(),
            Self::MoveDown => state.move_down(),
            Self::LineStart => state.move_to_beginning_of_line(),
            Self::LineEnd => state.move_to_end_of_line(),
            Self::Newline => state.newline(),
            Self::Backspace => state.backspace(),
            Self::TrimLine => state.trim_line(),
            Self::Quit => return Err(Quit),
        })
    }

    /// Whether the command can change the buffer (as opposed to the cursor).
    pub const fn is_edit(self) -> bool {
        matches!(
            self,
            Self::Write(_) | Self::Newline | Self::Backspace | Self::TrimLine
        )
    }
}

/// Look up the command bound to a single input byte.
///
/// Bytes with no binding, tab included, are literal text.
pub const fn command_for_byte(byte: u8) -> Command {
    match byte {
        ETX => Command::Quit,
        VT => Command::TrimLine,
        DLE => Command::MoveUp,
        SO => Command::MoveDown,
        SOH => Command::LineStart,
        STX => Command::MoveLeft,
        ACK => Command::MoveRight,
        ENQ => Command::LineEnd,
        BS | DEL => Command::Backspace,
        CR | LF => Command::Newline,
        other => Command::Write(other),
    }
}

/// Apply one input byte to `state`.
///
/// # Errors
///
/// Returns [`Quit`] when `byte` is the quit control code.
pub fn dispatch(state: EditorState, byte: u8) -> Result<EditorState, Quit> {
    command_for_byte(byte).apply(state)
}
