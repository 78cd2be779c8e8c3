//! UI events the controller reacts to

use heartform_rules::{FieldId, FormReport, FormValues, SampleProfile, ValidationResult};
use serde::Serialize;

use crate::progress::ProgressSteps;

/// One user interaction, as delivered by the host toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Focus(FieldId),
    Blur(FieldId),
    /// Text typed into an input
    Input(FieldId),
    /// Selection changed in a select
    Change(FieldId),
    Submit,
    FillSample(SampleProfile),
    /// The cosmetic processing delay ran out
    ProcessingElapsed,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Let the form post to the prediction backend
    Proceed { values: FormValues },
    /// Keep the user on the page; errors are shown inline
    Blocked { report: FormReport },
}

impl SubmitOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, SubmitOutcome::Proceed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    Validated(ValidationResult),
    Progress(ProgressSteps),
    Submitted(SubmitOutcome),
    ProcessingFinished,
}
