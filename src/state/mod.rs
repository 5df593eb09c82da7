//! Form state module

mod forms;
mod payload;
pub mod validation;

pub use forms::*;
pub use payload::SubmissionPayload;
pub use validation::ValidationError;
