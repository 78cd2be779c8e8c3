// File: heartform-rules/src/result.rs
// Purpose: Per-field and whole-form validation outcomes

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::field::FieldId;

/// Outcome of checking one value against its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Convert into a `Result`, carrying the message on failure
    pub fn into_result(self) -> Result<(), String> {
        match (self.valid, self.message) {
            (true, _) => Ok(()),
            (false, message) => Err(message.unwrap_or_default()),
        }
    }
}

/// Results for every field of a rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    fields: BTreeMap<FieldId, ValidationResult>,
    #[serde(skip)]
    required: BTreeSet<FieldId>,
}

impl FormReport {
    pub(crate) fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            required: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, field: FieldId, required: bool, result: ValidationResult) {
        if required {
            self.required.insert(field);
        }
        self.fields.insert(field, result);
    }

    /// The form can be submitted iff every required field passed
    pub fn is_valid(&self) -> bool {
        self.required
            .iter()
            .all(|field| self.fields.get(field).map_or(true, ValidationResult::is_valid))
    }

    pub fn get(&self, field: FieldId) -> Option<&ValidationResult> {
        self.fields.get(&field)
    }

    /// Results in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationResult)> {
        self.fields.iter().map(|(field, result)| (*field, result))
    }

    /// Failed fields with their messages, in form order
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, result)| (field, result.message.as_deref().unwrap_or_default()))
    }

    /// First failed field in form order, where the page scrolls to
    pub fn first_error(&self) -> Option<(FieldId, &str)> {
        self.errors().next()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_result() {
        assert_eq!(ValidationResult::success().into_result(), Ok(()));
        assert_eq!(
            ValidationResult::failure("Pilih opsi yang valid").into_result(),
            Err("Pilih opsi yang valid".to_string())
        );
    }

    #[test]
    fn test_optional_failure_does_not_block() {
        let mut report = FormReport::new();
        report.insert(FieldId::Age, true, ValidationResult::success());
        report.insert(FieldId::Ca, false, ValidationResult::failure("Pilih jumlah yang valid"));

        assert!(report.is_valid());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.first_error(), Some((FieldId::Ca, "Pilih jumlah yang valid")));
    }

    #[test]
    fn test_first_error_follows_form_order() {
        let mut report = FormReport::new();
        report.insert(FieldId::Thal, true, ValidationResult::failure("thal"));
        report.insert(FieldId::Sex, true, ValidationResult::failure("sex"));

        assert!(!report.is_valid());
        assert_eq!(report.first_error().map(|(field, _)| field), Some(FieldId::Sex));
    }
}
