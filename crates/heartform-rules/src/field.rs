//! Field identifiers of the heart-disease input form

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// One input of the form, named exactly as the form field.
///
/// Variants are declared in form order, so `Ord` and [`FieldId::ALL`]
/// both follow the order the fields appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 13] = [
        FieldId::Age,
        FieldId::Sex,
        FieldId::Cp,
        FieldId::Trestbps,
        FieldId::Chol,
        FieldId::Fbs,
        FieldId::Restecg,
        FieldId::Thalach,
        FieldId::Exang,
        FieldId::Oldpeak,
        FieldId::Slope,
        FieldId::Ca,
        FieldId::Thal,
    ];

    /// The `name` attribute of the form field
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Age => "age",
            FieldId::Sex => "sex",
            FieldId::Cp => "cp",
            FieldId::Trestbps => "trestbps",
            FieldId::Chol => "chol",
            FieldId::Fbs => "fbs",
            FieldId::Restecg => "restecg",
            FieldId::Thalach => "thalach",
            FieldId::Exang => "exang",
            FieldId::Oldpeak => "oldpeak",
            FieldId::Slope => "slope",
            FieldId::Ca => "ca",
            FieldId::Thal => "thal",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = RuleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| RuleError::UnknownField(name.to_string()))
    }
}
