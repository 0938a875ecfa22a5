//! Domain model types

pub mod evaluation;
pub mod package_input;

pub use evaluation::EvaluationResult;
pub use package_input::PackageInput;
