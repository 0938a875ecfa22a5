//! Evaluation result type

use serde::{Deserialize, Serialize};

/// Verdict for one package, serialized as the success payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub oversized: bool,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub total_dimensions: f64,
    /// One message per triggered rule in rule order, or the single
    /// "meets requirements" message.
    pub reasoning: Vec<String>,
}
