//! Typed patient record built from a validated form
//!
//! The prediction backend coerces the posted strings to numbers before
//! classifying them. [`PatientRecord`] is that coerced shape, with the
//! numeric measurements wrapped in range-checked `nutype` newtypes so a
//! record that exists is a record the rule table accepts.
//!
//! # Example
//!
//! ```rust
//! use heartform_rules::{FormRuleValidator, PatientRecord, SampleProfile};
//!
//! let validator = FormRuleValidator::standard();
//! let record = PatientRecord::from_values(&validator, &SampleProfile::HighRisk.values()).unwrap();
//! assert_eq!(record.age.into_inner(), 65);
//! ```

use core::str::FromStr;

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::field::FieldId;
use crate::validator::FormRuleValidator;
use crate::values::FormValues;

/// Age in years
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 120),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize, Into)
)]
pub struct Age(u16);

/// Resting systolic blood pressure in mmHg
#[nutype(
    validate(greater_or_equal = 50, less_or_equal = 300),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize, Into)
)]
pub struct RestingBloodPressure(u16);

/// Serum cholesterol in mg/dl
#[nutype(
    validate(greater_or_equal = 100, less_or_equal = 600),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize, Into)
)]
pub struct Cholesterol(u16);

/// Maximum heart rate reached, in bpm
#[nutype(
    validate(greater_or_equal = 60, less_or_equal = 220),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize, Into)
)]
pub struct MaxHeartRate(u16);

/// ST depression induced by exercise relative to rest
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 10.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize, Into)
)]
pub struct StDepression(f64);

/// One patient's inputs in the shape the classifier consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub age: Age,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: RestingBloodPressure,
    pub chol: Cholesterol,
    pub fbs: u8,
    pub restecg: u8,
    pub thalach: MaxHeartRate,
    pub exang: u8,
    pub oldpeak: StDepression,
    pub slope: u8,
    pub ca: u8,
    pub thal: u8,
}

impl PatientRecord {
    /// Validates `values` against `validator` and converts them
    ///
    /// Fails with [`RecordError::Invalid`] carrying the full report when any
    /// required field is rejected.
    pub fn from_values(validator: &FormRuleValidator, values: &FormValues) -> Result<Self, RecordError> {
        let report = validator.validate_all(values);
        if !report.is_valid() {
            return Err(RecordError::Invalid(report));
        }

        Ok(Self {
            age: Age::try_new(parse(values, FieldId::Age)?).map_err(reject(FieldId::Age))?,
            sex: parse(values, FieldId::Sex)?,
            cp: parse(values, FieldId::Cp)?,
            trestbps: RestingBloodPressure::try_new(parse(values, FieldId::Trestbps)?)
                .map_err(reject(FieldId::Trestbps))?,
            chol: Cholesterol::try_new(parse(values, FieldId::Chol)?).map_err(reject(FieldId::Chol))?,
            fbs: parse(values, FieldId::Fbs)?,
            restecg: parse(values, FieldId::Restecg)?,
            thalach: MaxHeartRate::try_new(parse(values, FieldId::Thalach)?).map_err(reject(FieldId::Thalach))?,
            exang: parse(values, FieldId::Exang)?,
            oldpeak: StDepression::try_new(parse(values, FieldId::Oldpeak)?).map_err(reject(FieldId::Oldpeak))?,
            slope: parse(values, FieldId::Slope)?,
            ca: parse(values, FieldId::Ca)?,
            thal: parse(values, FieldId::Thal)?,
        })
    }
}

fn parse<T>(values: &FormValues, field: FieldId) -> Result<T, RecordError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    values
        .get(field)
        .trim()
        .parse()
        .map_err(|err: T::Err| RecordError::Field {
            field,
            reason: err.to_string(),
        })
}

fn reject<E: core::fmt::Display>(field: FieldId) -> impl Fn(E) -> RecordError {
    move |err| RecordError::Field {
        field,
        reason: err.to_string(),
    }
}
