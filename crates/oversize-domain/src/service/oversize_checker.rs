//! Oversize checking service

use oversize_types::{EvaluationError, PackageField};
use serde_json::{Map, Value};

use crate::model::{EvaluationResult, PackageInput};
use crate::service::number_format::format_quantity;
use crate::service::observer::EvaluationObserver;

/// Weight at or above this is oversized (grams, inclusive)
pub const WEIGHT_LIMIT_GRAMS: f64 = 5000.0;
/// Any single dimension above this is oversized (inches, exclusive)
pub const DIMENSION_LIMIT_INCHES: f64 = 60.0;
/// length + width + height above this is oversized (inches, exclusive)
pub const TOTAL_DIMENSIONS_LIMIT_INCHES: f64 = 150.0;

pub const WITHIN_LIMITS_MESSAGE: &str = "Package meets all size and weight requirements";

/// A fixed oversize rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OversizeRule {
    Weight,
    Length,
    Width,
    Height,
    TotalDimensions,
}

impl OversizeRule {
    /// Rules in evaluation order; reasons are reported in this order.
    pub const ALL: [OversizeRule; 5] = [
        OversizeRule::Weight,
        OversizeRule::Length,
        OversizeRule::Width,
        OversizeRule::Height,
        OversizeRule::TotalDimensions,
    ];

    /// Reason message if this rule triggers for `input`.
    pub fn reason(self, input: &PackageInput) -> Option<String> {
        match self {
            OversizeRule::Weight => (input.weight >= WEIGHT_LIMIT_GRAMS).then(|| {
                format!(
                    "Weight ({}) is >= {} grams",
                    format_quantity(input.weight),
                    WEIGHT_LIMIT_GRAMS
                )
            }),
            OversizeRule::Length => dimension_reason(input, PackageField::Length),
            OversizeRule::Width => dimension_reason(input, PackageField::Width),
            OversizeRule::Height => dimension_reason(input, PackageField::Height),
            OversizeRule::TotalDimensions => {
                let total = input.total_dimensions();
                (total > TOTAL_DIMENSIONS_LIMIT_INCHES).then(|| {
                    format!(
                        "Total dimensions ({}) is > {} inches",
                        format_quantity(total),
                        TOTAL_DIMENSIONS_LIMIT_INCHES
                    )
                })
            }
        }
    }
}

fn dimension_reason(input: &PackageInput, field: PackageField) -> Option<String> {
    let value = input.get(field);
    (value > DIMENSION_LIMIT_INCHES).then(|| {
        format!(
            "{} ({}) is > {} inches",
            field.label(),
            format_quantity(value),
            DIMENSION_LIMIT_INCHES
        )
    })
}

/// Apply every rule to an already coerced package.
pub fn evaluate(input: &PackageInput) -> EvaluationResult {
    let reasons: Vec<String> = OversizeRule::ALL
        .iter()
        .filter_map(|rule| rule.reason(input))
        .collect();
    let oversized = !reasons.is_empty();
    let reasoning = if oversized {
        reasons
    } else {
        vec![WITHIN_LIMITS_MESSAGE.to_string()]
    };

    EvaluationResult {
        oversized,
        length: input.length,
        width: input.width,
        height: input.height,
        weight: input.weight,
        total_dimensions: input.total_dimensions(),
        reasoning,
    }
}

/// Coerce an `arguments` record and evaluate it, reporting the outcome to
/// `observer`.
///
/// Every number in a returned result is finite. Dimensions whose sum
/// overflows are an `UnexpectedFailure`.
pub fn check_package(
    arguments: &Map<String, Value>,
    observer: &dyn EvaluationObserver,
) -> Result<EvaluationResult, EvaluationError> {
    let outcome = PackageInput::from_arguments(arguments).and_then(|input| {
        if input.total_dimensions().is_finite() {
            Ok(evaluate(&input))
        } else {
            Err(EvaluationError::UnexpectedFailure(
                "total dimensions overflow a finite number".to_string(),
            ))
        }
    });
    match &outcome {
        Ok(result) => observer.on_evaluated(result),
        Err(err) => observer.on_rejected(err),
    }
    outcome
}
