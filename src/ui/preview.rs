use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::create_titled_block;

/// Draw the output pane with the last rendered message.
pub fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Converted Message — {}", app.session.format());
    let block = create_titled_block(&title, false);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let paragraph = if app.session.output().is_empty() {
        Paragraph::new("Press F5 to convert.").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.session.output())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
    };

    f.render_widget(paragraph, inner_area);
}
