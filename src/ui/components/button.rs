//! Button component for TUI

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 18;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, color: Color, is_enabled: bool) {
    let (border_style, text_style) = if is_enabled {
        (
            Style::default().fg(color),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Back / Next / Submit row. Next and Submit share a slot: Submit only
/// exists on the last step.
pub fn draw_step_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH), // Back
            Constraint::Min(0),               // spacer
            Constraint::Length(BUTTON_WIDTH), // Next or Submit
        ])
        .split(area);

    let form = app.wizard.form();
    render_button(frame, chunks[0], "◂ Back", Color::White, form.current() > 0);

    let submit = app.wizard.submit_control();
    if submit.visible {
        render_button(
            frame,
            chunks[2],
            &submit.label,
            app.config.accent(),
            submit.enabled,
        );
    } else {
        render_button(frame, chunks[2], "Next ▸", Color::Cyan, true);
    }
}
