//! Coerced package measurements

use oversize_types::{EvaluationError, PackageField};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::service::coercion::coerce_arguments;

/// Package measurements after coercion to floating point.
///
/// Linear fields are in inches, weight is in grams. No range checks are
/// applied: zero and negative values are evaluated as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PackageInput {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl PackageInput {
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    /// Build from the raw `arguments` record of an invocation.
    ///
    /// Absent keys count as `0`. The first field that fails coercion, in
    /// [`PackageField::ALL`] order, is reported.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, EvaluationError> {
        coerce_arguments(arguments)
    }

    pub fn get(&self, field: PackageField) -> f64 {
        match field {
            PackageField::Length => self.length,
            PackageField::Width => self.width,
            PackageField::Height => self.height,
            PackageField::Weight => self.weight,
        }
    }

    /// length + width + height
    pub fn total_dimensions(&self) -> f64 {
        self.length + self.width + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_dimensions() {
        let input = PackageInput::new(70.0, 30.0, 20.0, 2000.0);
        assert_eq!(input.total_dimensions(), 120.0);
    }

    #[test]
    fn test_get_by_field() {
        let input = PackageInput::new(1.0, 2.0, 3.0, 4.0);
        let values: Vec<f64> = PackageField::ALL.iter().map(|f| input.get(*f)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let input = PackageInput::new(-5.0, 0.0, 2.5, -1.0);
        assert_eq!(input.total_dimensions(), -2.5);
        assert_eq!(input.weight, -1.0);
    }
}
