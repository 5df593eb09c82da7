//! Form domain layer
//!
//! Type-safe multi-step form handling: fields, steps and the form that
//! owns the current step index and focus.

mod field;
mod lead_form;
mod step;

pub use field::FormField;
pub use lead_form::{Form, LeadForm};
pub use step::Step;
