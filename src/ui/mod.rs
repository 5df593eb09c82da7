//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    forms::draw_active_step(frame, areas.body, app);
    components::draw_step_buttons(frame, areas.buttons, app);
    layout::draw_footer(frame, areas.footer, app);

    // Notices are modal and drawn last
    if let Some(notice) = app.current_notice() {
        components::render_notice_dialog(frame, notice, app.config.accent());
    }
}
