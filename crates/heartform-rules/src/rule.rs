// File: heartform-rules/src/rule.rs
// Purpose: Field rule definitions and the static heart-disease rule table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RuleError;
use crate::field::FieldId;
use crate::numeric::NumericType;

/// The check applied to a non-empty value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RuleKind {
    /// Closed interval `[min, max]`
    Range {
        min: f64,
        max: f64,
        numeric: NumericType,
    },
    /// Exact match against one of the listed strings
    Enum { allowed: &'static [&'static str] },
}

/// Static definition of how one field's raw value is checked
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRule {
    pub field: FieldId,
    /// Display label, used in the "required" message
    pub label: &'static str,
    pub required: bool,
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Message shown when the value fails `kind`
    pub message: &'static str,
}

impl FieldRule {
    pub const fn range(
        field: FieldId,
        label: &'static str,
        min: f64,
        max: f64,
        numeric: NumericType,
        message: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            required: true,
            kind: RuleKind::Range { min, max, numeric },
            message,
        }
    }

    pub const fn one_of(
        field: FieldId,
        label: &'static str,
        allowed: &'static [&'static str],
        message: &'static str,
    ) -> Self {
        Self {
            field,
            label,
            required: true,
            kind: RuleKind::Enum { allowed },
            message,
        }
    }

    /// Same rule, but an empty value passes
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Message for an empty required value
    pub fn required_message(&self) -> String {
        format!("{} harus diisi", self.label)
    }
}

const BINARY: &[&str] = &["0", "1"];
const ZERO_TO_TWO: &[&str] = &["0", "1", "2"];
const ZERO_TO_THREE: &[&str] = &["0", "1", "2", "3"];

const INVALID_OPTION: &str = "Pilih opsi yang valid";

static STANDARD_RULES: [FieldRule; 13] = [
    FieldRule::range(FieldId::Age, "Usia", 1.0, 120.0, NumericType::Integer, "Usia harus antara 1-120 tahun"),
    FieldRule::one_of(FieldId::Sex, "Jenis Kelamin", BINARY, INVALID_OPTION),
    FieldRule::one_of(FieldId::Cp, "Jenis Nyeri Dada", ZERO_TO_THREE, "Pilih jenis nyeri yang valid"),
    FieldRule::range(
        FieldId::Trestbps,
        "Tekanan Darah Istirahat",
        50.0,
        300.0,
        NumericType::Integer,
        "Tekanan darah harus antara 50-300 mmHg",
    ),
    FieldRule::range(
        FieldId::Chol,
        "Kolesterol Serum",
        100.0,
        600.0,
        NumericType::Integer,
        "Kolesterol harus antara 100-600 mg/dl",
    ),
    FieldRule::one_of(FieldId::Fbs, "Gula Darah Puasa", BINARY, INVALID_OPTION),
    FieldRule::one_of(FieldId::Restecg, "Resting ECG", ZERO_TO_TWO, INVALID_OPTION),
    FieldRule::range(
        FieldId::Thalach,
        "Detak Jantung Maksimal",
        60.0,
        220.0,
        NumericType::Integer,
        "Detak jantung harus antara 60-220 bpm",
    ),
    FieldRule::one_of(FieldId::Exang, "Angina Induksi Latihan", BINARY, INVALID_OPTION),
    FieldRule::range(FieldId::Oldpeak, "Depresi ST", 0.0, 10.0, NumericType::Float, "Depresi ST harus antara 0-10"),
    FieldRule::one_of(FieldId::Slope, "Kemiringan Segmen ST", ZERO_TO_TWO, INVALID_OPTION),
    FieldRule::one_of(FieldId::Ca, "Jumlah Pembuluh Darah Utama", ZERO_TO_THREE, "Pilih jumlah yang valid"),
    FieldRule::one_of(FieldId::Thal, "Thalassemia", ZERO_TO_TWO, INVALID_OPTION),
];

/// Immutable set of field rules, at most one per field
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: BTreeMap<FieldId, FieldRule>,
}

impl RuleTable {
    /// Builds a table, rejecting a second rule for the same field
    pub fn new(rules: impl IntoIterator<Item = FieldRule>) -> Result<Self, RuleError> {
        let mut map = BTreeMap::new();
        for rule in rules {
            if map.insert(rule.field, rule).is_some() {
                return Err(RuleError::DuplicateRule(rule.field));
            }
        }
        Ok(Self { rules: map })
    }

    /// The heart-disease form's table: every field required
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.iter().map(|rule| (rule.field, *rule)).collect(),
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    /// Rules in form order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.iter().filter(|rule| rule.required).map(|rule| rule.field)
    }

    /// Label for a field, falling back to its form name
    pub fn label(&self, field: FieldId) -> &'static str {
        self.get(field).map(|rule| rule.label).unwrap_or(field.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_field() {
        let table = RuleTable::standard();
        assert_eq!(table.len(), FieldId::ALL.len());
        for field in FieldId::ALL {
            assert!(table.get(field).is_some(), "missing rule for {field}");
        }
        assert_eq!(table.required_fields().count(), 13);
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let rule = FieldRule::one_of(FieldId::Sex, "Jenis Kelamin", BINARY, INVALID_OPTION);
        let err = RuleTable::new([rule, rule.optional()]).unwrap_err();
        assert_eq!(err, RuleError::DuplicateRule(FieldId::Sex));
    }

    #[test]
    fn test_required_message_uses_label() {
        let table = RuleTable::standard();
        let rule = table.get(FieldId::Trestbps).unwrap();
        assert_eq!(rule.required_message(), "Tekanan Darah Istirahat harus diisi");
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let table = RuleTable::new([]).unwrap();
        assert_eq!(table.label(FieldId::Ca), "ca");
    }
}
