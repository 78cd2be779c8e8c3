//! heartform rules
//!
//! Static field rules for the heart-disease risk input form and the pure
//! validator that evaluates them. Used by the form controller, the WASM
//! bindings and the CLI, so the browser and the command line reject
//! exactly the same values.
//!
//! ```rust
//! use heartform_rules::{FieldId, FormRuleValidator};
//!
//! let validator = FormRuleValidator::standard();
//! assert!(validator.validate(FieldId::Age, "65").valid);
//! assert!(!validator.validate(FieldId::Thal, "5").valid);
//! ```

pub mod error;
pub mod field;
pub mod numeric;
pub mod record;
pub mod result;
pub mod rule;
pub mod sample;
pub mod validator;
pub mod values;

pub use error::{RecordError, RuleError};
pub use field::FieldId;
pub use numeric::NumericType;
pub use record::PatientRecord;
pub use result::{FormReport, ValidationResult};
pub use rule::{FieldRule, RuleKind, RuleTable};
pub use sample::SampleProfile;
pub use validator::{step_index, FormRuleValidator};
pub use values::FormValues;
