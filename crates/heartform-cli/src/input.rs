// File: src/input.rs
// Purpose: Reading patient record files into raw form values

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use heartform_rules::FormValues;

/// Loads a `.toml` or `.json` file of `field = value` pairs
///
/// Values may be strings or numbers; numbers are kept in the text form
/// a user would have typed.
pub fn load_record(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read record file: {:?}", path))?;

    let named = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&content),
        Some("toml") => parse_toml(&content),
        _ => bail!("Unsupported record file {:?} (expected .toml or .json)", path),
    }
    .with_context(|| format!("Failed to parse record file: {:?}", path))?;

    FormValues::from_named(named).with_context(|| format!("Invalid record file: {:?}", path))
}

fn parse_json(content: &str) -> Result<BTreeMap<String, String>> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(content)?;
    raw.into_iter()
        .map(|(name, value)| {
            let text = match value {
                serde_json::Value::String(text) => text,
                serde_json::Value::Number(number) => number.to_string(),
                other => bail!("field `{name}` must be a string or number, got {other}"),
            };
            Ok((name, text))
        })
        .collect()
}

fn parse_toml(content: &str) -> Result<BTreeMap<String, String>> {
    let raw: BTreeMap<String, toml::Value> = toml::from_str(content)?;
    raw.into_iter()
        .map(|(name, value)| {
            let text = match value {
                toml::Value::String(text) => text,
                toml::Value::Integer(number) => number.to_string(),
                toml::Value::Float(number) => number.to_string(),
                other => bail!("field `{name}` must be a string or number, got {}", other.type_str()),
            };
            Ok((name, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartform_rules::FieldId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toml_numbers_and_strings() {
        let named = parse_toml("age = 65\noldpeak = 3.5\nsex = \"1\"").unwrap();
        assert_eq!(named["age"], "65");
        assert_eq!(named["oldpeak"], "3.5");
        assert_eq!(named["sex"], "1");
    }

    #[test]
    fn test_json_numbers_and_strings() {
        let named = parse_json(r#"{"chol": 250, "thal": "1", "oldpeak": 1.5}"#).unwrap();
        let values = FormValues::from_named(named).unwrap();
        assert_eq!(values.get(FieldId::Chol), "250");
        assert_eq!(values.get(FieldId::Thal), "1");
        assert_eq!(values.get(FieldId::Oldpeak), "1.5");
    }

    #[test]
    fn test_rejects_nested_values() {
        assert!(parse_json(r#"{"age": [65]}"#).is_err());
        assert!(parse_toml("age = true").is_err());
    }
}
