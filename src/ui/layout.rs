//! Layout components (header, footer)

use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PREV_SHORTCUT, SUBMIT_SHORTCUT};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct AppAreas {
    pub header: Rect,
    pub body: Rect,
    pub buttons: Rect,
    pub footer: Rect,
}

/// Create the main layout
pub fn create_layout(area: Rect) -> AppAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Active step
            Constraint::Length(3), // Step buttons
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppAreas {
        header: chunks[0],
        body: chunks[1],
        buttons: chunks[2],
        footer: chunks[3],
    }
}

/// Draw brand and step progress
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.wizard.form();
    let accent = app.config.accent();

    let mut progress = Vec::new();
    for (i, step) in form.steps().iter().enumerate() {
        if i > 0 {
            progress.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if step.is_active() {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else if i < form.current() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        progress.push(Span::styled(step.title.clone(), style));
    }
    progress.push(Span::styled(
        format!("   Step {} of {}", form.current() + 1, form.step_count()),
        Style::default().fg(Color::Gray),
    ));

    let header = Paragraph::new(Line::from(progress)).block(
        Block::default()
            .title(format!(" {} ", app.config.brand_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(header, area);
}

/// Draw shortcut hints and the copyright line
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let key = Style::default().fg(Color::Cyan);
    let hint = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(" field  ", hint),
        Span::styled(NEXT_SHORTCUT, key),
        Span::styled(" next  ", hint),
        Span::styled(PREV_SHORTCUT, key),
        Span::styled(" back  ", hint),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::styled(" submit  ", hint),
        Span::styled("Esc", key),
        Span::styled(" quit", hint),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[0]);

    let year = chrono::Local::now().year();
    let copyright = Paragraph::new(format!("© {year} {}", app.config.brand_name()))
        .alignment(Alignment::Right)
        .style(hint);
    frame.render_widget(copyright, chunks[1]);
}
