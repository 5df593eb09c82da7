//! Trait abstraction for the lead endpoint to enable mocking in tests

use super::{EndpointReply, SubmissionError};
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Sends a completed lead to wherever leads go
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Deliver the payload and return the endpoint's parsed reply
    async fn submit(&self, payload: SubmissionPayload) -> Result<EndpointReply, SubmissionError>;
}
