//! Reusable UI components

mod button;
mod dialog;

pub use button::draw_step_buttons;
pub use dialog::render_notice_dialog;
