//! Rendering of the active form step

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields of the active step. Hidden steps are not drawn at all.
pub fn draw_active_step(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.wizard.form();
    let Some(step) = form.steps().iter().find(|s| !s.is_hidden()) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", step.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = step
        .fields
        .iter()
        .map(|f| {
            if f.is_multiline() {
                Constraint::Min(FIELD_HEIGHT + 2)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    // Remaining space
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    for (i, field) in step.fields.iter().enumerate() {
        draw_field(frame, chunks[i], field, i == form.focus());
    }
}
