//! Notice dialog: warnings, success and error messages from the wizard

use super::base::{render_dialog, DialogConfig};
use crate::wizard::{Notice, NoticeKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn kind_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    }
}

/// Render a notice overlay centered on the screen, bordered in `accent`
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice, accent: Color) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ];

    let title = format!("{} {}", notice.kind.icon(), notice.title);
    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: kind_color(notice.kind),
            border_color: accent,
            message: &notice.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
