use ratatui::layout::Size;

use crate::app::Message;
use crate::input::Decoder;

/// Turn one raw input byte into a message, if it completes one.
///
/// Bytes inside an escape sequence yield nothing until the sequence ends.
pub(super) fn message_for_byte(decoder: &mut Decoder, byte: u8) -> Option<Message> {
    decoder.feed(byte).map(Message::Edit)
}

/// A resize message when the terminal size changed since the last poll.
pub(super) fn message_for_size(last: Size, now: Size) -> Option<Message> {
    (last != now).then_some(Message::Resize(now.width, now.height))
}
