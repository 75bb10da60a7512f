//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod editor;
mod preview;

pub use editor::draw_input;
pub use preview::draw_preview;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::ui as layout;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(layout::INPUT_SPLIT_PERCENT),
            Constraint::Min(1),
            Constraint::Length(layout::COMMAND_BAR_HEIGHT), // Command/status bar at bottom
        ])
        .split(f.size());

    draw_input(f, app, chunks[0]);
    draw_preview(f, app, chunks[1]);
    draw_command_bar(f, app, chunks[2]);

    // Modals render on top of everything else
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    if app.show_help {
        draw_help_modal(f);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_command_mode { "Command" } else { "Commands/Status" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(title, Style::default().fg(Color::Yellow)));

    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Account for the border
        .split(area)[0];

    if app.is_command_mode {
        let command = Paragraph::new(format!(" :{}", app.command_buffer))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        f.set_cursor(
            inner_area.left() + app.command_buffer.len() as u16 + 2,
            inner_area.top(),
        );
        return;
    }

    if let Some(status) = &app.status_message {
        let feedback = Paragraph::new(format!(" {}", status.text))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        f.render_widget(feedback, inner_area);
        return;
    }

    let mut help_text = create_help_text(&[
        ("Tab", "Format"),
        ("F5", "Convert"),
        ("Ctrl+Y", "Copy"),
        ("Ctrl+L", "Clear"),
        (":", "Command"),
        ("F1", "Help"),
    ]);
    help_text.push(Span::styled(
        format!(" | Format: {}", app.session.format()),
        Style::default().fg(Color::Cyan),
    ));

    let status_bar = Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        text.push(Span::raw(format!(": {description}")));
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();

    let width = 50.min(size.width.saturating_sub(4));
    let height = 6;

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for the dismiss hint
        ])
        .margin(1) // Account for the border
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

// Draw the help modal with keybindings and the expected input format
fn draw_help_modal(f: &mut Frame) {
    let size = f.size();

    let width = 58.min(size.width.saturating_sub(4));
    let height = 22.min(size.height.saturating_sub(4));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    let help_text: Vec<Line> = build_help_content()
        .iter()
        .map(|(key, desc, is_header)| {
            if *is_header {
                Line::from(Span::styled(
                    *key,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else if desc.is_empty() {
                Line::from(Span::styled(*key, Style::default().fg(Color::White)))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{key:>12}"),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner_area);
}

// Help content: keybindings plus the 4-line input convention
fn build_help_content() -> Vec<(&'static str, &'static str, bool)> {
    vec![
        ("── Keys ──", "", true),
        ("Tab", "Toggle retail/wholesale format", false),
        ("F5", "Convert the input", false),
        ("Ctrl+Y", "Copy output to clipboard", false),
        ("Ctrl+L", "Clear input and output", false),
        ("Ctrl+V", "Paste from clipboard", false),
        ("Ctrl+Q", "Quit", false),
        ("Esc", "Dismiss modal / cancel command", false),
        ("", "", false),
        ("── Commands ──", "", true),
        (":convert :copy :clear", "Run an action", false),
        (":retail :wholesale", "Select the output format", false),
        (":q / :quit", "Quit application", false),
        ("", "", false),
        ("── Input format ──", "", true),
        ("Repeat four lines per tire:", "", false),
        ("  Tire Description", "", false),
        ("  MADE IN <COUNTRY>", "", false),
        ("  AED <price>", "", false),
        ("  <warranty years>", "", false),
        ("", "", false),
        ("Press Esc, F1 or ? to close", "", true),
    ]
}
