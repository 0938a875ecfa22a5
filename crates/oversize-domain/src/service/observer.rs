//! Hook for reporting evaluation outcomes to an observability sink

use oversize_types::EvaluationError;

use crate::model::EvaluationResult;

/// Receives the outcome of every check.
///
/// Implementations must not panic; their return values are ignored and they
/// have no way to alter the response.
pub trait EvaluationObserver: Send + Sync {
    fn on_evaluated(&self, result: &EvaluationResult);

    fn on_rejected(&self, error: &EvaluationError);
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {
    fn on_evaluated(&self, _result: &EvaluationResult) {}

    fn on_rejected(&self, _error: &EvaluationError) {}
}
