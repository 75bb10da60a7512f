use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::create_titled_block;

/// Placeholder shown while the editor is empty.
const FORMAT_HINT: [&str; 5] = [
    "Paste your quotation here, four lines per tire:",
    "  Tire Description",
    "  MADE IN <COUNTRY>",
    "  AED <price>",
    "  <warranty years>",
];

/// Draw the input pane: the multi-line editor with cursor and scrolling.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_input(f: &mut Frame, app: &mut App, area: Rect) {
    let block = create_titled_block("Input Message", !app.is_command_mode);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    // Keep scrolling in sync with the real on-screen height
    app.editor.viewport_height = inner_area.height.max(1) as usize;

    if !app.editor.has_content() && app.editor.cursor_x == 0 && app.editor.cursor_y == 0 {
        let hint: Vec<Line> = FORMAT_HINT
            .iter()
            .map(|text| Line::styled(*text, Style::default().fg(Color::DarkGray)))
            .collect();
        f.render_widget(Paragraph::new(hint), inner_area);
    } else {
        let start_line = app.editor.scroll_offset;
        let end_line = (start_line + inner_area.height as usize).min(app.editor.content.len());

        let visible: Vec<Line> = app.editor.content[start_line..end_line]
            .iter()
            .map(|line| Line::styled(line.clone(), Style::default().fg(Color::White)))
            .collect();

        f.render_widget(Paragraph::new(visible), inner_area);
    }

    // The command bar owns the cursor while a command is being typed
    if !app.is_command_mode && app.error_message.is_none() && !app.show_help {
        let cursor_row = app.editor.cursor_y.saturating_sub(app.editor.scroll_offset) as u16;
        if cursor_row < inner_area.height {
            f.set_cursor(
                inner_area.left() + app.editor.cursor_display_column() as u16,
                inner_area.top() + cursor_row,
            );
        }
    }
}
