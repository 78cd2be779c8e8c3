//! heartform WASM
//!
//! WebAssembly bindings for the heart-disease risk form.
//! Exposes the same rule table the CLI uses for real-time client-side
//! validation, plus [`HeartFormApp`], which drives the form through the DOM.

use std::collections::BTreeMap;

use heartform::TooltipTable;
use heartform_rules::{FieldId, FormReport, FormRuleValidator, FormValues, SampleProfile, ValidationResult};
use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod app;
mod dom;

pub use app::HeartFormApp;
pub use dom::{DomForm, DomShare};

static VALIDATOR: Lazy<FormRuleValidator> = Lazy::new(FormRuleValidator::standard);
static TOOLTIPS: Lazy<TooltipTable> = Lazy::new(TooltipTable::standard);

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Whole-form result returned to JavaScript
#[derive(Serialize, Debug)]
pub struct FormValidation {
    pub valid: bool,
    pub fields: BTreeMap<&'static str, ValidationResult>,
}

impl From<&FormReport> for FormValidation {
    fn from(report: &FormReport) -> Self {
        Self {
            valid: report.is_valid(),
            fields: report
                .iter()
                .map(|(field, result)| (field.as_str(), result.clone()))
                .collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct SampleOption {
    pub profile: &'static str,
    pub summary: &'static str,
}

/// Converts to plain JavaScript objects, never `Map`
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn values_from_js(values: JsValue) -> Result<FormValues, JsValue> {
    let named: BTreeMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    FormValues::from_named(named).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn field_from_js(name: &str) -> Result<FieldId, JsValue> {
    name.parse().map_err(|e: heartform_rules::RuleError| JsValue::from_str(&e.to_string()))
}

/// Validate a single field value
///
/// # Returns
/// `{ valid: boolean, message?: string }`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateField('age', '150');
/// // { valid: false, message: 'Usia harus antara 1-120 tahun' }
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    let result = VALIDATOR.validate(field_from_js(field_name)?, value);
    to_js(&result)
}

/// Validate every field of a `{ name: value }` object
///
/// Missing names read as empty; unknown names are an error.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let report = VALIDATOR.validate_all(&values_from_js(values)?);
    to_js(&FormValidation::from(&report))
}

/// Fraction of required fields that hold a value, in `[0, 1]`
#[wasm_bindgen(js_name = completionRatio)]
pub fn completion_ratio(values: JsValue) -> Result<f64, JsValue> {
    Ok(VALIDATOR.completion_ratio(&values_from_js(values)?))
}

/// Progress step reached for `values` out of `step_count`
#[wasm_bindgen(js_name = stepIndex)]
pub fn step_index(values: JsValue, step_count: usize) -> Result<usize, JsValue> {
    Ok(VALIDATOR.step_index(&values_from_js(values)?, step_count))
}

/// `{ name: value }` for `high_risk`, `medium_risk` or `low_risk`
#[wasm_bindgen(js_name = sampleData)]
pub fn sample_data(profile: &str) -> Result<JsValue, JsValue> {
    let profile: SampleProfile = profile
        .parse()
        .map_err(|e: heartform_rules::RuleError| JsValue::from_str(&e.to_string()))?;
    to_js(&profile.values().to_named())
}

/// Display label of a field
#[wasm_bindgen(js_name = fieldLabel)]
pub fn field_label(field_name: &str) -> Result<String, JsValue> {
    Ok(VALIDATOR.table().label(field_from_js(field_name)?).to_string())
}

/// Tooltip text of a field
#[wasm_bindgen]
pub fn tooltip(field_name: &str) -> Result<Option<String>, JsValue> {
    Ok(TOOLTIPS.get(field_from_js(field_name)?).map(str::to_string))
}

/// Form field names in page order
#[wasm_bindgen(js_name = fieldNames)]
pub fn field_names() -> Vec<String> {
    FieldId::ALL.iter().map(|field| field.as_str().to_string()).collect()
}
