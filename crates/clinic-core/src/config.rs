//! Clinic configuration.
//!
//! The host app passes overrides as JSON; anything left out keeps the
//! built-in default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClinicConfig {
    pub letterhead: Letterhead,
    pub login: Credentials,
    pub history: HistoryLimits,
}

/// Doctor and clinic details printed on reports and shared cards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Letterhead {
    /// Short name for headings and greetings
    pub doctor_name: String,
    /// Full name for the ID card
    pub doctor_full_name: String,
    pub phone: String,
    pub whatsapp: String,
    /// Multi-line clinic address block
    pub address: String,
    pub emergency_contact: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            doctor_name: "Dr. Mansoor".to_string(),
            doctor_full_name: "Dr. Mansoor Ali V. P.".to_string(),
            phone: "9895353078".to_string(),
            whatsapp: "919895353078".to_string(),
            address: "Dr.MANSOOR ALI.V.P, MD (PHYSICIAN)\n\
                      General Practitioner | Reg No: 35083 | +91 9895353078 | Pathappiriyam\n\
                      BOOKING NO: +918606344694"
                .to_string(),
            emergency_contact: "112".to_string(),
        }
    }
}

/// Login credentials. Only the SHA-256 of the password is kept.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    /// Lowercase hex SHA-256 of the password
    pub password_sha256: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "1".to_string(),
            // sha256("1")
            password_sha256: "6b86b273ff34fce19d6b804eff5a3f5747ada4eaa22f1d49c01e52ddb7875b4b"
                .to_string(),
        }
    }
}

/// Row caps for the "recent" history views.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryLimits {
    pub patient_recent: usize,
    pub all_recent: usize,
}

impl Default for HistoryLimits {
    fn default() -> Self {
        Self {
            patient_recent: 10,
            all_recent: 20,
        }
    }
}

impl ClinicConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
