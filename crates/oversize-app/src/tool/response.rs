//! Wire shape of tool responses

use oversize_domain::EvaluationResult;
use oversize_types::EvaluationError;
use serde::{Deserialize, Serialize};

/// Failure payload: `{"oversized": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionPayload {
    pub oversized: bool,
    pub error: String,
}

impl From<&EvaluationError> for RejectionPayload {
    fn from(err: &EvaluationError) -> Self {
        Self {
            oversized: false,
            error: err.to_string(),
        }
    }
}

/// Exactly one of a verdict or a rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Evaluated(EvaluationResult),
    Rejected(RejectionPayload),
}

impl ToolResponse {
    /// Serialize for the host. Never fails: a serializer error is itself
    /// turned into a rejection payload.
    pub fn to_json(&self, pretty: bool) -> String {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.unwrap_or_else(|err| {
            serde_json::json!({
                "oversized": false,
                "error": EvaluationError::UnexpectedFailure(err.to_string()).to_string(),
            })
            .to_string()
        })
    }
}

impl From<Result<EvaluationResult, EvaluationError>> for ToolResponse {
    fn from(outcome: Result<EvaluationResult, EvaluationError>) -> Self {
        match outcome {
            Ok(result) => ToolResponse::Evaluated(result),
            Err(err) => ToolResponse::Rejected(RejectionPayload::from(&err)),
        }
    }
}
