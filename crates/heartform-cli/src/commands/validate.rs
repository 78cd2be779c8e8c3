use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use heartform_rules::{FormReport, FormRuleValidator, PatientRecord, SampleProfile};
use tracing::info;

use crate::input::load_record;

pub fn execute(file: Option<&Path>, sample: Option<SampleProfile>, json: bool) -> Result<()> {
    let values = match (file, sample) {
        (_, Some(profile)) => profile.values(),
        (Some(path), None) => load_record(path)?,
        (None, None) => bail!("Pass a record file or --sample"),
    };

    let validator = FormRuleValidator::standard();
    let report = validator.validate_all(&values);
    info!(errors = report.error_count(), "record validated");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&validator, &report);
    }

    if !report.is_valid() {
        bail!("{} field(s) failed validation", report.error_count());
    }

    if !json {
        let record = PatientRecord::from_values(&validator, &values)?;
        println!();
        println!("{}", "Record ready for prediction:".green().bold());
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

fn print_report(validator: &FormRuleValidator, report: &FormReport) {
    for (field, result) in report.iter() {
        let label = validator.table().label(field);
        match &result.message {
            Some(message) if !result.valid => {
                println!("{} {:<10} {}: {}", "✗".red(), field.as_str(), label, message.red());
            }
            _ => println!("{} {:<10} {}", "✓".green(), field.as_str(), label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_record(dir: &TempDir, name: &str, age: &str) -> std::path::PathBuf {
        let mut named = SampleProfile::LowRisk.values().to_named();
        named.insert("age", age.to_string());
        let path = dir.path().join(name);
        fs::write(&path, toml::to_string(&named).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_valid_record_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_record(&dir, "patient.toml", "35");
        assert!(execute(Some(&path), None, false).is_ok());
    }

    #[test]
    fn test_invalid_record_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_record(&dir, "patient.toml", "150");

        let err = execute(Some(&path), None, false).unwrap_err();
        assert_eq!(err.to_string(), "1 field(s) failed validation");
        assert!(execute(Some(&path), None, true).is_err());
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_record(&dir, "patient.txt", "35");
        assert!(execute(Some(&path), None, false).is_err());
    }

    #[test]
    fn test_every_sample_passes() {
        for profile in SampleProfile::ALL {
            assert!(execute(None, Some(profile), true).is_ok());
        }
    }
}
