use super::keys::{ARROW_LEFT, ARROW_RIGHT, CSI_BRACKET, ESC};
use super::{Command, command_for_byte};

/// Where the matcher is inside an `ESC [ <dir>` sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Normal,
    SawEscape,
    SawBracket,
}

/// Result of feeding one byte to the [`EscapeMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// The byte is not part of a sequence; dispatch it normally.
    Passthrough(u8),
    /// The byte was consumed and the sequence is still open.
    Pending,
    /// The byte completed a recognized sequence.
    Command(Command),
    /// The byte was consumed and the sequence ended with no effect.
    Swallowed,
}

/// Recognizes the three-byte arrow-key sequences `ESC [ C` and `ESC [ D`.
///
/// Input arrives one byte at a time with no lookahead, so the matcher
/// keeps its position between calls. Consumption is fixed: once `ESC`
/// is seen the next byte is always consumed, and if that byte was `[`
/// the byte after it is consumed too. Anything unrecognized along the
/// way is swallowed and the matcher returns to normal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EscapeMatcher {
    state: State,
}

impl EscapeMatcher {
    pub const fn new() -> Self {
        Self {
            state: State::Normal,
        }
    }

    /// Whether a sequence is in progress.
    pub const fn is_pending(&self) -> bool {
        !matches!(self.state, State::Normal)
    }

    /// Feed the next input byte.
    pub const fn feed(&mut self, byte: u8) -> Feed {
        match self.state {
            State::Normal => {
                if byte == ESC {
                    self.state = State::SawEscape;
                    Feed::Pending
                } else {
                    Feed::Passthrough(byte)
                }
            }
            State::SawEscape => {
                if byte == CSI_BRACKET {
                    self.state = State::SawBracket;
                    Feed::Pending
                } else {
                    self.state = State::Normal;
                    Feed::Swallowed
                }
            }
            State::SawBracket => {
                self.state = State::Normal;
                match byte {
                    ARROW_RIGHT => Feed::Command(Command::MoveRight),
                    ARROW_LEFT => Feed::Command(Command::MoveLeft),
                    // Up (`A`) and down (`B`) have no binding.
                    _ => Feed::Swallowed,
                }
            }
        }
    }
}

/// Turns the raw input feed into editing commands.
///
/// Combines the [`EscapeMatcher`] with the single-byte table in
/// [`command_for_byte`]. This is what the host read loop drives.
///
/// # Example
///
/// ```
/// use tined::input::{Command, Decoder};
///
/// let mut decoder = Decoder::new();
/// assert_eq!(decoder.feed(b'x'), Some(Command::Write(b'x')));
/// assert_eq!(decoder.feed(0x1b), None);
/// assert_eq!(decoder.feed(b'['), None);
/// assert_eq!(decoder.feed(b'D'), Some(Command::MoveLeft));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    matcher: EscapeMatcher,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            matcher: EscapeMatcher::new(),
        }
    }

    /// Feed the next input byte; returns the command it completes, if any.
    pub const fn feed(&mut self, byte: u8) -> Option<Command> {
        match self.matcher.feed(byte) {
            Feed::Passthrough(byte) => Some(command_for_byte(byte)),
            Feed::Command(command) => Some(command),
            Feed::Pending | Feed::Swallowed => None,
        }
    }

    /// Decode a whole chunk of input in order.
    pub fn feed_all<'a>(&'a mut self, bytes: &'a [u8]) -> impl Iterator<Item = Command> + 'a {
        bytes.iter().filter_map(|&byte| self.feed(byte))
    }
}
