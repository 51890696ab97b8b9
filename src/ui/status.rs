use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_path.as_deref().and_then(|p| p.file_name()).map_or_else(
        || "[No Name]".to_string(),
        |s| s.to_string_lossy().to_string(),
    );

    let modified_indicator = if model.modified { " [+]" } else { "" };
    let cursor = model.editor.cursor();
    let cursor_info = format!("Ln {}, Col {}", cursor.row + 1, cursor.col + 1);

    let status = format!(" {filename}{modified_indicator}  {cursor_info}  ^C:quit");

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}
