//! Domain services

pub mod coercion;
pub mod number_format;
pub mod observer;
pub mod oversize_checker;

pub use coercion::{coerce_arguments, coerce_value};
pub use number_format::format_quantity;
pub use observer::{EvaluationObserver, NoopObserver};
pub use oversize_checker::{
    check_package, evaluate, OversizeRule, DIMENSION_LIMIT_INCHES, TOTAL_DIMENSIONS_LIMIT_INCHES,
    WEIGHT_LIMIT_GRAMS, WITHIN_LIMITS_MESSAGE,
};
