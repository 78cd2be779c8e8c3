// File: heartform-rules/src/validator.rs
// Purpose: Evaluates field rules and derives form completion

use tracing::{debug, trace};

use crate::error::RuleError;
use crate::field::FieldId;
use crate::numeric::check_range;
use crate::result::{FormReport, ValidationResult};
use crate::rule::{FieldRule, RuleKind, RuleTable};
use crate::values::FormValues;

/// Checks raw field values against an injected [`RuleTable`]
#[derive(Debug, Clone, Default)]
pub struct FormRuleValidator {
    table: RuleTable,
}

impl FormRuleValidator {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Validator over [`RuleTable::standard`]
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Validates a single raw value
    ///
    /// The value is trimmed first. An empty required value fails with the
    /// "harus diisi" message whatever the rule kind. An empty optional value,
    /// or a field with no rule, always passes.
    pub fn validate(&self, field: FieldId, raw: &str) -> ValidationResult {
        let Some(rule) = self.table.get(field) else {
            return ValidationResult::success();
        };
        let value = raw.trim();
        trace!(field = %field, value, "validating field");

        if value.is_empty() {
            return if rule.required {
                ValidationResult::failure(rule.required_message())
            } else {
                ValidationResult::success()
            };
        }

        if satisfies(rule, value) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(rule.message)
        }
    }

    /// Same as [`validate`](Self::validate) but takes the form's field name
    pub fn validate_named(&self, name: &str, raw: &str) -> Result<ValidationResult, RuleError> {
        let field: FieldId = name.parse()?;
        Ok(self.validate(field, raw))
    }

    /// Validates every field in the table
    pub fn validate_all(&self, values: &FormValues) -> FormReport {
        self.validate_where(values, |_| true)
    }

    /// Validates the ruled fields for which `include` holds
    ///
    /// Fields left out are absent from the report, so they neither block
    /// submission nor count as errors.
    pub fn validate_where(&self, values: &FormValues, include: impl Fn(FieldId) -> bool) -> FormReport {
        let mut report = FormReport::new();
        for rule in self.table.iter().filter(|rule| include(rule.field)) {
            let result = self.validate(rule.field, values.get(rule.field));
            report.insert(rule.field, rule.required, result);
        }
        debug!(
            fields = report.len(),
            errors = report.error_count(),
            valid = report.is_valid(),
            "validated form"
        );
        report
    }

    /// Fraction of required fields holding a non-empty value
    ///
    /// A table with no required fields counts as complete.
    pub fn completion_ratio(&self, values: &FormValues) -> f64 {
        self.completion_ratio_where(values, |_| true)
    }

    /// Completion ratio over the required fields for which `include` holds
    pub fn completion_ratio_where(&self, values: &FormValues, include: impl Fn(FieldId) -> bool) -> f64 {
        let (filled, required) = self
            .table
            .required_fields()
            .filter(|field| include(*field))
            .fold((0usize, 0usize), |(filled, total), field| {
                (filled + usize::from(values.is_filled(field)), total + 1)
            });
        if required == 0 {
            return 1.0;
        }
        filled as f64 / required as f64
    }

    /// Progress step reached: `floor(ratio * step_count)`, in `0..=step_count`
    pub fn step_index(&self, values: &FormValues, step_count: usize) -> usize {
        step_index(self.completion_ratio(values), step_count)
    }
}

/// Maps a completion ratio to a discrete step, clamped to `0..=step_count`
pub fn step_index(ratio: f64, step_count: usize) -> usize {
    let step = (ratio.clamp(0.0, 1.0) * step_count as f64).floor();
    (step as usize).min(step_count)
}

fn satisfies(rule: &FieldRule, value: &str) -> bool {
    match rule.kind {
        RuleKind::Range { min, max, numeric } => check_range(value, numeric, min, max),
        RuleKind::Enum { allowed } => allowed.iter().any(|candidate| *candidate == value),
    }
}
