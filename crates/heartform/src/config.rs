// File: src/config.rs
// Purpose: Configuration parsing from heartform.toml

use anyhow::{bail, Context, Result};
use heartform_rules::SampleProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Form behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub progress: ProgressConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub share: ShareConfig,

    #[serde(default)]
    pub samples: SampleConfig,
}

/// Progress indicator above the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressConfig {
    #[serde(default = "default_step_count")]
    pub step_count: usize,
}

/// Cosmetic delays handed to the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// How long the "processing" overlay stays up after a valid submit
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    #[serde(default = "default_share_title")]
    pub title: String,
}

/// Which sample records the "fill sample data" action offers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleConfig {
    #[serde(default = "default_offered")]
    pub offered: Vec<SampleProfile>,
}

// Default values
fn default_step_count() -> usize {
    4
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_notification_duration_ms() -> u64 {
    3000
}

fn default_share_title() -> String {
    "Hasil Prediksi Risiko Penyakit Jantung".to_string()
}

fn default_offered() -> Vec<SampleProfile> {
    SampleProfile::ALL.to_vec()
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            notification_duration_ms: default_notification_duration_ms(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: default_share_title(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            offered: default_offered(),
        }
    }
}

impl TimingConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

impl FormConfig {
    /// Load configuration from a heartform.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./heartform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("heartform.toml")
    }

    /// Parse and check a TOML document; empty input yields defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.progress.step_count == 0 {
            bail!("progress.step_count must be at least 1");
        }
        if self.samples.offered.is_empty() {
            bail!("samples.offered must list at least one profile");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.progress.step_count, 4);
        assert_eq!(config.timing.processing_delay(), Duration::from_secs(2));
        assert_eq!(config.timing.notification_duration(), Duration::from_secs(3));
        assert_eq!(config.share.title, "Hasil Prediksi Risiko Penyakit Jantung");
        assert_eq!(config.samples.offered.len(), 3);
    }

    #[test]
    fn test_empty_config() {
        let config = FormConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [progress]
            step_count = 5

            [samples]
            offered = ["high_risk", "low_risk"]
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.progress.step_count, 5);
        assert_eq!(config.samples.offered, vec![SampleProfile::HighRisk, SampleProfile::LowRisk]);
        assert_eq!(config.timing.processing_delay_ms, 2000);
    }

    #[test]
    fn test_rejects_zero_steps() {
        let err = FormConfig::from_toml_str("[progress]\nstep_count = 0").unwrap_err();
        assert!(err.to_string().contains("step_count"));
    }

    #[test]
    fn test_rejects_unknown_profile() {
        assert!(FormConfig::from_toml_str("[samples]\noffered = [\"extreme\"]").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = FormConfig::load("does/not/exist/heartform.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }
}
