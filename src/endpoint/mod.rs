//! Lead endpoint module for submitting completed forms over HTTP

mod client;
mod traits;

pub use client::{EndpointClient, DEFAULT_ENDPOINT};
pub use traits::LeadSubmitter;

#[cfg(test)]
pub use traits::MockLeadSubmitter;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status value the endpoint uses to acknowledge a lead
pub const SUCCESS_STATUS: &str = "success";

/// Body returned by the endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointReply {
    #[serde(default)]
    pub status: String,
}

impl EndpointReply {
    #[cfg(test)]
    pub fn success() -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Turn a non-success status into an error
    pub fn into_result(self) -> Result<Self, SubmissionError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SubmissionError::Rejected {
                status: self.status,
            })
        }
    }
}

/// Failures after a submission has been handed to the endpoint
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Submission failed")]
    Rejected { status: String },
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success() {
        assert!(EndpointReply::success().is_success());
        assert!(EndpointReply::success().into_result().is_ok());
    }

    #[test]
    fn test_reply_other_status_is_rejected() {
        let reply = EndpointReply {
            status: "error".to_string(),
        };
        let err = reply.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Submission failed");
    }

    #[test]
    fn test_reply_missing_status_defaults_to_empty() {
        let reply: EndpointReply = serde_json::from_str(r#"{"result": "ok"}"#).unwrap();
        assert_eq!(reply.status, "");
        assert!(!reply.is_success());
    }

    #[test]
    fn test_json_error_message_is_passed_through() {
        let json_err = serde_json::from_str::<EndpointReply>("<html>").unwrap_err();
        let expected = json_err.to_string();
        let err = SubmissionError::from(json_err);
        assert_eq!(err.to_string(), expected);
    }
}
