//! Raw form values keyed by field

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::field::FieldId;

/// Raw, untrimmed text of each form field
///
/// A field with no entry reads as the empty string, which is how an
/// untouched input looks on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<FieldId, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds values from `name -> value` pairs, rejecting unknown names
    pub fn from_named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, RuleError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::new();
        for (name, value) in pairs {
            let field: FieldId = name.as_ref().parse()?;
            values.set(field, value);
        }
        Ok(values)
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn clear(&mut self, field: FieldId) {
        self.0.remove(&field);
    }

    /// True when the field holds something other than whitespace
    pub fn is_filled(&self, field: FieldId) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Values keyed by form name, the shape the prediction backend posts
    pub fn to_named(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(field, value)| (field.as_str(), value.clone()))
            .collect()
    }
}

impl<V: Into<String>> FromIterator<(FieldId, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(field, value)| (field, value.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reads_empty() {
        let values = FormValues::new();
        assert_eq!(values.get(FieldId::Age), "");
        assert!(!values.is_filled(FieldId::Age));
    }

    #[test]
    fn test_whitespace_is_not_filled() {
        let values: FormValues = [(FieldId::Chol, "   ")].into_iter().collect();
        assert!(!values.is_filled(FieldId::Chol));
    }

    #[test]
    fn test_from_named() {
        let values = FormValues::from_named([("age", "65"), ("thal", "2")]).unwrap();
        assert_eq!(values.get(FieldId::Age), "65");
        assert_eq!(values.get(FieldId::Thal), "2");

        let err = FormValues::from_named([("pressure", "120")]).unwrap_err();
        assert_eq!(err, RuleError::UnknownField("pressure".to_string()));
    }

    #[test]
    fn test_json_shape() {
        let values = FormValues::from_named([("oldpeak", "1.5")]).unwrap();
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"oldpeak":"1.5"}"#);

        let back: FormValues = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
