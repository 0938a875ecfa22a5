//! Package field identifiers shared by the domain and app layers

use serde::{Deserialize, Serialize};

/// One of the four measured quantities of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageField {
    Length,
    Width,
    Height,
    Weight,
}

impl PackageField {
    /// All fields, in the order they are read and coerced.
    pub const ALL: [PackageField; 4] = [
        PackageField::Length,
        PackageField::Width,
        PackageField::Height,
        PackageField::Weight,
    ];

    /// Key used in the `arguments` record and the response payload
    pub fn key(self) -> &'static str {
        match self {
            PackageField::Length => "length",
            PackageField::Width => "width",
            PackageField::Height => "height",
            PackageField::Weight => "weight",
        }
    }

    /// Capitalized name used in reasoning messages
    pub fn label(self) -> &'static str {
        match self {
            PackageField::Length => "Length",
            PackageField::Width => "Width",
            PackageField::Height => "Height",
            PackageField::Weight => "Weight",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            PackageField::Weight => "grams",
            _ => "inches",
        }
    }
}

impl std::fmt::Display for PackageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let keys: Vec<_> = PackageField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["length", "width", "height", "weight"]);
    }

    #[test]
    fn test_units() {
        assert_eq!(PackageField::Weight.unit(), "grams");
        assert_eq!(PackageField::Height.unit(), "inches");
    }
}
