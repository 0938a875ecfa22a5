//! `tracing`-backed evaluation observer

use oversize_domain::{EvaluationObserver, EvaluationResult};
use oversize_types::EvaluationError;

/// Emits one structured event per check.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl EvaluationObserver for TracingObserver {
    fn on_evaluated(&self, result: &EvaluationResult) {
        tracing::info!(
            oversized = result.oversized,
            length = result.length,
            width = result.width,
            height = result.height,
            weight = result.weight,
            total_dimensions = result.total_dimensions,
            reasons = result.reasoning.len(),
            "Package check result"
        );
        for reason in &result.reasoning {
            tracing::debug!(reason = %reason, "Package check reasoning");
        }
    }

    fn on_rejected(&self, error: &EvaluationError) {
        match error {
            EvaluationError::MalformedInput => {
                tracing::warn!(kind = error.kind(), "Rejected package check: {}", error);
            }
            EvaluationError::NonNumericField { field } => {
                tracing::warn!(
                    kind = error.kind(),
                    field = %field,
                    "Rejected package check: {}",
                    error
                );
            }
            EvaluationError::UnexpectedFailure(details) => {
                tracing::error!(
                    kind = error.kind(),
                    details = %details,
                    "Error checking package"
                );
            }
        }
    }
}
