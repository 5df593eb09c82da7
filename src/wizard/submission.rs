//! A submission that has passed validation and is ready to be sent

use crate::endpoint::{EndpointReply, LeadSubmitter, SubmissionError};
use crate::state::SubmissionPayload;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Payload tagged with the id of the attempt it belongs to
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub payload: SubmissionPayload,
}

/// Result of sending a [`PendingSubmission`]
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub result: Result<EndpointReply, SubmissionError>,
}

impl PendingSubmission {
    pub fn new(payload: SubmissionPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
        }
    }

    /// Send through `submitter`. This is the only suspension point of a submission.
    pub async fn send(self, submitter: Arc<dyn LeadSubmitter>) -> SubmissionOutcome {
        let span = tracing::info_span!("submission", id = %self.id);
        let id = self.id;
        let result = async move {
            tracing::info!("posting lead");
            let result = submitter.submit(self.payload).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "lead submission failed");
            }
            result
        }
        .instrument(span)
        .await;
        SubmissionOutcome { id, result }
    }
}
