//! # Health Certificate Data Model
//!
//! Field names follow the DCC JSON schema (`nam`, `dob`, `v`, `t`, `r`, ...)
//! so decoded certificates deserialize without a mapping layer. Optional
//! text fields default to the empty string, matching how absent values are
//! treated by the rules.

use serde::{Deserialize, Serialize};

/// A cryptographically verified health certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCertificate {
    /// Country code of the issuing member state.
    pub issuer: String,
    /// Issuance time, epoch seconds.
    pub issued_at: i64,
    /// Expiration time, epoch seconds; `42` marks a specimen.
    pub expiration_time: i64,
    /// The embedded statement payload.
    pub dcc: Dcc,
}

/// Digital COVID Certificate payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dcc {
    /// Schema version.
    #[serde(rename = "ver", default)]
    pub version: String,
    /// Date of birth: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or empty.
    #[serde(rename = "dob", default)]
    pub date_of_birth: String,
    /// Holder name.
    #[serde(rename = "nam")]
    pub name: DccName,
    /// Vaccination statements.
    #[serde(rename = "v", default, skip_serializing_if = "Vec::is_empty")]
    pub vaccinations: Vec<DccVaccination>,
    /// Test statements.
    #[serde(rename = "t", default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<DccTest>,
    /// Recovery statements.
    #[serde(rename = "r", default, skip_serializing_if = "Vec::is_empty")]
    pub recoveries: Vec<DccRecovery>,
}

/// Holder name, free-text and ICAO-standardized forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DccName {
    /// Family name.
    #[serde(rename = "fn", default)]
    pub family_name: String,
    /// Standardized family name.
    #[serde(rename = "fnt", default)]
    pub standardized_family_name: String,
    /// Given name.
    #[serde(rename = "gn", default)]
    pub given_name: String,
    /// Standardized given name.
    #[serde(rename = "gnt", default)]
    pub standardized_given_name: String,
}

/// Vaccination statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DccVaccination {
    #[serde(rename = "tg")]
    pub disease_targeted: String,
    #[serde(rename = "vp", default)]
    pub vaccine: String,
    #[serde(rename = "mp")]
    pub medicinal_product: String,
    #[serde(rename = "ma", default)]
    pub marketing_authorization_holder: String,
    #[serde(rename = "dn")]
    pub dose_number: u32,
    #[serde(rename = "sd")]
    pub total_series_of_doses: u32,
    /// `YYYY-MM-DD`.
    #[serde(rename = "dt")]
    pub date_of_vaccination: String,
    #[serde(rename = "co", default)]
    pub country_of_vaccination: String,
    #[serde(rename = "is", default)]
    pub certificate_issuer: String,
    #[serde(rename = "ci", default)]
    pub certificate_identifier: String,
}

/// Test statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DccTest {
    #[serde(rename = "tg")]
    pub disease_targeted: String,
    #[serde(rename = "tt")]
    pub type_of_test: String,
    #[serde(rename = "nm", default)]
    pub test_name: String,
    #[serde(rename = "ma", default)]
    pub test_name_and_manufacturer: String,
    /// RFC 3339 date-time of sample collection.
    #[serde(rename = "sc")]
    pub date_time_of_collection: String,
    #[serde(rename = "tr")]
    pub test_result: String,
    #[serde(rename = "tc", default)]
    pub testing_centre: String,
    #[serde(rename = "co", default)]
    pub country_of_test: String,
    #[serde(rename = "is", default)]
    pub certificate_issuer: String,
    #[serde(rename = "ci", default)]
    pub certificate_identifier: String,
}

/// Recovery statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DccRecovery {
    #[serde(rename = "tg")]
    pub disease_targeted: String,
    /// `YYYY-MM-DD`.
    #[serde(rename = "fr")]
    pub date_of_first_positive_test: String,
    #[serde(rename = "co", default)]
    pub country_of_test: String,
    #[serde(rename = "is", default)]
    pub certificate_issuer: String,
    /// `YYYY-MM-DD`, optional.
    #[serde(rename = "df", default)]
    pub certificate_valid_from: String,
    /// `YYYY-MM-DD`, optional.
    #[serde(rename = "du", default)]
    pub certificate_valid_until: String,
    #[serde(rename = "ci", default)]
    pub certificate_identifier: String,
}
