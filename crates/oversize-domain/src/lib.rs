//! Domain layer for package oversize checking
//!
//! Holds the package model, the coercion of raw argument values, the fixed
//! rule table and the observer hook used to report outcomes.

pub mod model;
pub mod service;

pub use model::{EvaluationResult, PackageInput};
pub use service::{check_package, evaluate, EvaluationObserver, NoopObserver, OversizeRule};
