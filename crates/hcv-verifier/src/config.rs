//! # Verifier Configuration
//!
//! The policy and trust material every verification call depends on:
//! the local jurisdiction, the European business rules, and the trusted
//! issuer keys of both credential families.
//!
//! Loaded once at initialization from a YAML document, validated, then
//! shared read-only behind an `Arc`. Nothing mutates it afterwards.
//!
//! ```yaml
//! local_country_code: NL
//! european_rules:
//!   vaccineAllowedProducts: [EU/1/20/1528, EU/1/20/1507]
//!   testAllowedTypes: [LP6464-4, LP217198-3]
//!   vaccinationValidityDelayDays: 14
//!   testValidityHours: 40
//!   recoveryValidFromDays: 11
//!   recoveryValidUntilDays: 180
//! domestic_issuers:
//!   testPk: 5e0c...e1
//! european_issuers:
//!   25f3c5a1b2d4e6f7: 9a41...0c
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hcv_core::CountryCode;
use hcv_crypto::IssuerKeyRing;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Business rules for international certificates.
///
/// Field names are camelCase to match the published policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EuropeanVerificationRules {
    /// Accepted `medicinalProduct` codes.
    pub vaccine_allowed_products: BTreeSet<String>,
    /// Accepted `typeOfTest` codes.
    pub test_allowed_types: BTreeSet<String>,
    /// Whole days after the vaccination date before it counts.
    pub vaccination_validity_delay_days: i64,
    /// Hours a negative test remains valid after collection.
    pub test_validity_hours: i64,
    /// Days after the first positive test a recovery becomes valid.
    pub recovery_valid_from_days: i64,
    /// Days after the first positive test a recovery stops being valid.
    pub recovery_valid_until_days: i64,
}

impl EuropeanVerificationRules {
    /// Check internal consistency of the rule parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vaccination_validity_delay_days < 0 {
            return Err(ConfigError::Invalid(
                "vaccinationValidityDelayDays must not be negative".to_string(),
            ));
        }
        if self.test_validity_hours <= 0 {
            return Err(ConfigError::Invalid("testValidityHours must be positive".to_string()));
        }
        if self.recovery_valid_until_days < self.recovery_valid_from_days {
            return Err(ConfigError::Invalid(format!(
                "recoveryValidUntilDays ({}) precedes recoveryValidFromDays ({})",
                self.recovery_valid_until_days, self.recovery_valid_from_days
            )));
        }
        Ok(())
    }
}

/// Process-wide verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifierConfig {
    /// The jurisdiction this verifier runs in. Domestic results carry it;
    /// international certificates from it are passed to the domestic scheme.
    pub local_country_code: CountryCode,
    pub european_rules: EuropeanVerificationRules,
    /// Keys trusted to issue domestic credentials.
    #[serde(default)]
    pub domestic_issuers: IssuerKeyRing,
    /// Keys trusted to sign international certificates.
    #[serde(default)]
    pub european_issuers: IssuerKeyRing,
}

impl VerifierConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Validate the rules. Country code and keys are validated on parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.european_rules.validate()?;
        if self.domestic_issuers.is_empty() && self.european_issuers.is_empty() {
            tracing::warn!("verifier configured without any trusted issuer keys");
        }
        Ok(())
    }
}
