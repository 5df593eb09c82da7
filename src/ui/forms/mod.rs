//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `step_form`: The active step of the lead form

mod field_renderer;
mod step_form;

pub use step_form::draw_active_step;
