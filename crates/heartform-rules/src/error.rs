//! Error types for rule lookup and typed record construction

use thiserror::Error;

use crate::field::FieldId;
use crate::result::FormReport;

/// Errors raised when looking up fields, profiles or building rule tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("unknown sample profile `{0}` (expected high_risk, medium_risk or low_risk)")]
    UnknownProfile(String),

    #[error("field `{0}` has more than one rule")]
    DuplicateRule(FieldId),
}

/// Errors raised when turning raw form values into a [`crate::PatientRecord`]
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("form has {} invalid field(s)", .0.error_count())]
    Invalid(FormReport),

    #[error("field `{field}` cannot be converted: {reason}")]
    Field { field: FieldId, reason: String },
}
