//! ASCII control codes recognized on the input feed.

/// Start of heading (Ctrl-A): beginning of line.
pub const SOH: u8 = 0x01;
/// Start of text (Ctrl-B): cursor left.
pub const STX: u8 = 0x02;
/// End of text (Ctrl-C): quit.
pub const ETX: u8 = 0x03;
/// Enquiry (Ctrl-E): end of line.
pub const ENQ: u8 = 0x05;
/// Acknowledge (Ctrl-F): cursor right.
pub const ACK: u8 = 0x06;
/// Backspace (Ctrl-H).
pub const BS: u8 = 0x08;
/// Horizontal tab. Stored as data, never a command.
pub const TAB: u8 = 0x09;
/// Line feed (Ctrl-J): newline, and the row delimiter in files.
pub const LF: u8 = 0x0A;
/// Vertical tab (Ctrl-K): kill line.
pub const VT: u8 = 0x0B;
/// Carriage return (Enter): newline.
pub const CR: u8 = 0x0D;
/// Shift out (Ctrl-N): cursor down.
pub const SO: u8 = 0x0E;
/// Data link escape (Ctrl-P): cursor up.
pub const DLE: u8 = 0x10;
/// Escape: starts an arrow-key sequence.
pub const ESC: u8 = 0x1B;
/// Delete: backspace.
pub const DEL: u8 = 0x7F;

/// Second byte of an arrow-key sequence (`ESC [`).
pub const CSI_BRACKET: u8 = b'[';
/// Final byte of the right-arrow sequence.
pub const ARROW_RIGHT: u8 = b'C';
/// Final byte of the left-arrow sequence.
pub const ARROW_LEFT: u8 = b'D';
