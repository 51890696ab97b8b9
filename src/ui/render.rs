use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::projection::Projection;
use super::status;

/// Split the frame into the text area and the one-row status bar.
pub fn split_editor_area(area: Rect) -> (Rect, Rect) {
    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };
    (text_area, status_area)
}

/// Render the complete UI.
///
/// The terminal backend clears and repaints the frame; rows are drawn top
/// to bottom from the scroll offset, then the hardware cursor is placed
/// at the projected cursor position.
pub fn render(model: &Model, frame: &mut Frame) {
    let (text_area, status_area) = split_editor_area(frame.area());

    let projection = Projection::of(&model.editor, text_area.height as usize);
    let lines: Vec<Line> = projection.lines.into_iter().map(Line::raw).collect();
    frame.render_widget(Paragraph::new(lines), text_area);

    status::render_status_bar(model, frame, status_area);

    let (x, y) = projection.cursor;
    if text_area.width > 0 && text_area.height > 0 {
        frame.set_cursor_position(Position::new(
            text_area.x + x.min(text_area.width - 1),
            text_area.y + y.min(text_area.height - 1),
        ));
    }
}
