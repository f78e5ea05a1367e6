//! # Attribute Normalizer
//!
//! Builds [`VerificationDetails`], the only data a successful verification
//! reveals: single-character initials, birth day and month, specimen flag,
//! and which credential scheme was used.
//!
//! ## Privacy Invariant
//!
//! Nothing beyond one character of each name and the day/month of birth
//! leaves this module. Birth components that the credential does not carry
//! are replaced with the redaction marker `XX`, never an empty string.

use hcv_core::CountryCode;
use hcv_vc::{DateOfBirth, DateOfBirthError, HealthCertificate};
use hcv_zkp::{AttributeMap, DOMESTIC_CREDENTIAL_VERSION};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replaces a birth day or month the credential does not carry.
pub const DOB_EMPTY_VALUE: &str = "XX";

/// Credential version reported for international certificates.
pub const EUROPEAN_CREDENTIAL_VERSION: &str = "1";

/// Domestic attribute names copied into the result.
pub mod attr {
    pub const IS_SPECIMEN: &str = "isSpecimen";
    pub const IS_PAPER_PROOF: &str = "isPaperProof";
    pub const VALID_FROM: &str = "validFrom";
    pub const VALID_FOR_HOURS: &str = "validForHours";
    pub const FIRST_NAME_INITIAL: &str = "firstNameInitial";
    pub const LAST_NAME_INITIAL: &str = "lastNameInitial";
    pub const BIRTH_DAY: &str = "birthDay";
    pub const BIRTH_MONTH: &str = "birthMonth";
}

/// A required domestic attribute was not disclosed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing attribute {0}")]
pub struct MissingAttribute(pub &'static str);

/// Look up a disclosed attribute that must be present.
pub(crate) fn required<'a>(attributes: &'a AttributeMap, name: &'static str) -> Result<&'a str, MissingAttribute> {
    attributes
        .get(name)
        .map(String::as_str)
        .ok_or(MissingAttribute(name))
}

/// The minimized outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDetails {
    /// `"2"` for domestic credentials, `"1"` for international ones.
    pub credential_version: String,
    /// `"1"` for specimen credentials, `"0"` otherwise.
    pub is_specimen: String,
    /// Issuing country; domestic credentials only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_country_code: Option<String>,
    pub first_name_initial: String,
    pub last_name_initial: String,
    pub birth_day: String,
    pub birth_month: String,
}

impl VerificationDetails {
    /// Details for a verified domestic disclosure.
    ///
    /// Attributes are copied verbatim; the issuer already constrained them
    /// to single characters and two-digit birth fragments.
    pub fn from_domestic(attributes: &AttributeMap, country: &CountryCode) -> Result<Self, MissingAttribute> {
        Ok(Self {
            credential_version: DOMESTIC_CREDENTIAL_VERSION.to_string(),
            is_specimen: required(attributes, attr::IS_SPECIMEN)?.to_string(),
            issuer_country_code: Some(country.to_string()),
            first_name_initial: required(attributes, attr::FIRST_NAME_INITIAL)?.to_string(),
            last_name_initial: required(attributes, attr::LAST_NAME_INITIAL)?.to_string(),
            birth_day: required(attributes, attr::BIRTH_DAY)?.to_string(),
            birth_month: required(attributes, attr::BIRTH_MONTH)?.to_string(),
        })
    }

    /// Details for a validated international certificate.
    pub fn from_european(hcert: &HealthCertificate, is_specimen: bool) -> Result<Self, DateOfBirthError> {
        let dob = DateOfBirth::parse(&hcert.dcc.date_of_birth)?;
        let name = &hcert.dcc.name;

        Ok(Self {
            credential_version: EUROPEAN_CREDENTIAL_VERSION.to_string(),
            is_specimen: if is_specimen { "1" } else { "0" }.to_string(),
            issuer_country_code: None,
            first_name_initial: initial(&name.standardized_given_name),
            last_name_initial: initial(&name.standardized_family_name),
            birth_day: dob.day().unwrap_or(DOB_EMPTY_VALUE).to_string(),
            birth_month: dob.month().unwrap_or(DOB_EMPTY_VALUE).to_string(),
        })
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn domestic_copies_attributes_and_stamps_country() {
        let attrs = testing::domestic_attributes(1_625_140_800, 40);
        let nl = CountryCode::new("NL").unwrap();
        let details = VerificationDetails::from_domestic(&attrs, &nl).unwrap();
        assert_eq!(
            details,
            VerificationDetails {
                credential_version: "2".to_string(),
                is_specimen: "0".to_string(),
                issuer_country_code: Some("NL".to_string()),
                first_name_initial: "A".to_string(),
                last_name_initial: "R".to_string(),
                birth_day: "20".to_string(),
                birth_month: "10".to_string(),
            }
        );
    }

    #[test]
    fn domestic_missing_attribute_is_named() {
        let mut attrs = testing::domestic_attributes(1_625_140_800, 40);
        attrs.remove(attr::BIRTH_MONTH);
        let nl = CountryCode::new("NL").unwrap();
        let err = VerificationDetails::from_domestic(&attrs, &nl).unwrap_err();
        assert_eq!(err.to_string(), "missing attribute birthMonth");
    }

    #[test]
    fn european_takes_initials_and_birth_fragments() {
        let hcert = testing::hcert_with_test(testing::negative_test("2021-07-01T02:00:00Z"));
        let details = VerificationDetails::from_european(&hcert, false).unwrap();
        assert_eq!(details.credential_version, "1");
        assert_eq!(details.is_specimen, "0");
        assert_eq!(details.issuer_country_code, None);
        assert_eq!(details.first_name_initial, "J");
        assert_eq!(details.last_name_initial, "D");
        assert_eq!(details.birth_month, "01");
        assert_eq!(details.birth_day, "02");
    }

    #[test]
    fn european_redacts_missing_granularity() {
        let mut hcert = testing::hcert_with_test(testing::negative_test("2021-07-01T02:00:00Z"));
        hcert.dcc.date_of_birth = "1990".to_string();
        let details = VerificationDetails::from_european(&hcert, true).unwrap();
        assert_eq!(details.is_specimen, "1");
        assert_eq!(details.birth_month, DOB_EMPTY_VALUE);
        assert_eq!(details.birth_day, DOB_EMPTY_VALUE);

        hcert.dcc.date_of_birth = "1990-04".to_string();
        let details = VerificationDetails::from_european(&hcert, false).unwrap();
        assert_eq!(details.birth_month, "04");
        assert_eq!(details.birth_day, DOB_EMPTY_VALUE);
    }

    #[test]
    fn european_empty_name_part_gives_empty_initial() {
        let mut hcert = testing::hcert_with_test(testing::negative_test("2021-07-01T02:00:00Z"));
        hcert.dcc.name.standardized_given_name.clear();
        let details = VerificationDetails::from_european(&hcert, false).unwrap();
        assert_eq!(details.first_name_initial, "");
        assert_eq!(details.last_name_initial, "D");
    }

    #[test]
    fn european_initial_is_one_character_not_one_byte() {
        let mut hcert = testing::hcert_with_test(testing::negative_test("2021-07-01T02:00:00Z"));
        hcert.dcc.name.standardized_family_name = "ÖZTÜRK".to_string();
        let details = VerificationDetails::from_european(&hcert, false).unwrap();
        assert_eq!(details.last_name_initial, "Ö");
    }

    #[test]
    fn serializes_camel_case_without_absent_country() {
        let hcert = testing::hcert_with_test(testing::negative_test("2021-07-01T02:00:00Z"));
        let json = serde_json::to_value(VerificationDetails::from_european(&hcert, false).unwrap()).unwrap();
        assert_eq!(json["credentialVersion"], "1");
        assert_eq!(json["firstNameInitial"], "J");
        assert!(json.get("issuerCountryCode").is_none());
    }
}
