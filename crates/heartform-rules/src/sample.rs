//! Predefined patient records used to autofill the form

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::field::FieldId;
use crate::values::FormValues;

/// Which predefined record to fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleProfile {
    HighRisk,
    MediumRisk,
    LowRisk,
}

// Field order matches FieldId::ALL
const HIGH_RISK: [&str; 13] = ["65", "1", "3", "180", "350", "1", "2", "120", "1", "3.5", "0", "3", "2"];
const MEDIUM_RISK: [&str; 13] = ["55", "1", "1", "140", "250", "0", "1", "150", "0", "1.5", "1", "1", "1"];
const LOW_RISK: [&str; 13] = ["35", "0", "0", "110", "180", "0", "0", "180", "0", "0.5", "2", "0", "0"];

impl SampleProfile {
    pub const ALL: [SampleProfile; 3] = [
        SampleProfile::HighRisk,
        SampleProfile::MediumRisk,
        SampleProfile::LowRisk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SampleProfile::HighRisk => "high_risk",
            SampleProfile::MediumRisk => "medium_risk",
            SampleProfile::LowRisk => "low_risk",
        }
    }

    /// Risk wording used in the "data contoh ... telah diisi" notice
    pub fn risk_label(self) -> &'static str {
        match self {
            SampleProfile::HighRisk => "berisiko tinggi",
            SampleProfile::MediumRisk => "berisiko sedang",
            SampleProfile::LowRisk => "berisiko rendah",
        }
    }

    /// One-line description shown when offering the profile
    pub fn summary(self) -> &'static str {
        match self {
            SampleProfile::HighRisk => "Data Berisiko Tinggi (65 tahun, pria, gejala berat)",
            SampleProfile::MediumRisk => "Data Berisiko Sedang (55 tahun, pria, gejala ringan)",
            SampleProfile::LowRisk => "Data Berisiko Rendah (35 tahun, wanita, sehat)",
        }
    }

    fn raw(self) -> &'static [&'static str; 13] {
        match self {
            SampleProfile::HighRisk => &HIGH_RISK,
            SampleProfile::MediumRisk => &MEDIUM_RISK,
            SampleProfile::LowRisk => &LOW_RISK,
        }
    }

    /// The complete record for this profile
    pub fn values(self) -> FormValues {
        FieldId::ALL.iter().copied().zip(self.raw().iter().copied()).collect()
    }
}

impl fmt::Display for SampleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleProfile {
    type Err = RuleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SampleProfile::ALL
            .iter()
            .copied()
            .find(|profile| profile.as_str() == name)
            .ok_or_else(|| RuleError::UnknownProfile(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_values() {
        let values = SampleProfile::HighRisk.values();
        assert_eq!(values.get(FieldId::Age), "65");
        assert_eq!(values.get(FieldId::Trestbps), "180");
        assert_eq!(values.get(FieldId::Oldpeak), "3.5");
        assert_eq!(values.get(FieldId::Thal), "2");
    }

    #[test]
    fn test_low_risk_values() {
        let values = SampleProfile::LowRisk.values();
        assert_eq!(values.get(FieldId::Sex), "0");
        assert_eq!(values.get(FieldId::Thalach), "180");
        assert_eq!(values.get(FieldId::Slope), "2");
    }

    #[test]
    fn test_every_profile_fills_every_field() {
        for profile in SampleProfile::ALL {
            let values = profile.values();
            assert!(FieldId::ALL.iter().all(|field| values.is_filled(*field)), "{profile}");
        }
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!("medium_risk".parse::<SampleProfile>().unwrap(), SampleProfile::MediumRisk);
        assert!(matches!("extreme".parse::<SampleProfile>(), Err(RuleError::UnknownProfile(_))));
    }
}
