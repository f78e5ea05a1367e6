//! Shared fixtures for unit tests.

use std::collections::BTreeSet;

use hcv_core::{CountryCode, Timestamp};
use hcv_crypto::Ed25519KeyPair;
use hcv_vc::{
    CertificateSigner, Dcc, DccName, DccRecovery, DccTest, DccVaccination, HealthCertificate,
    DISEASE_TARGETED_COVID_19, TEST_RESULT_NOT_DETECTED,
};
use hcv_zkp::{AttributeMap, MockIssuer};

use crate::config::{EuropeanVerificationRules, VerifierConfig};
use crate::details::attr;

pub(crate) const PRODUCT: &str = "EU/1/20/1528";
pub(crate) const TEST_TYPE: &str = "LP6464-4";

pub(crate) fn rules() -> EuropeanVerificationRules {
    EuropeanVerificationRules {
        vaccine_allowed_products: BTreeSet::from([PRODUCT.to_string()]),
        test_allowed_types: BTreeSet::from([TEST_TYPE.to_string()]),
        vaccination_validity_delay_days: 14,
        test_validity_hours: 48,
        recovery_valid_from_days: 11,
        recovery_valid_until_days: 180,
    }
}

pub(crate) fn ts(s: &str) -> Timestamp {
    Timestamp::parse_lenient(s).unwrap()
}

/// An issuer, a signer, and a config trusting both.
pub(crate) struct Fixture {
    pub issuer: MockIssuer,
    pub signer: CertificateSigner,
    pub config: VerifierConfig,
}

pub(crate) fn fixture() -> Fixture {
    let issuer = MockIssuer::with_key_id(Ed25519KeyPair::from_seed(&[1u8; 32]), "testPk");
    let signer = CertificateSigner::new(Ed25519KeyPair::from_seed(&[2u8; 32]));
    let config = VerifierConfig {
        local_country_code: CountryCode::new("NL").unwrap(),
        european_rules: rules(),
        domestic_issuers: issuer.key_ring(),
        european_issuers: signer.key_ring(),
    };
    Fixture { issuer, signer, config }
}

pub(crate) fn domestic_attributes(valid_from: i64, valid_for_hours: u32) -> AttributeMap {
    AttributeMap::from([
        (attr::IS_SPECIMEN.to_string(), "0".to_string()),
        (attr::IS_PAPER_PROOF.to_string(), "0".to_string()),
        (attr::VALID_FROM.to_string(), valid_from.to_string()),
        (attr::VALID_FOR_HOURS.to_string(), valid_for_hours.to_string()),
        (attr::FIRST_NAME_INITIAL.to_string(), "A".to_string()),
        (attr::LAST_NAME_INITIAL.to_string(), "R".to_string()),
        (attr::BIRTH_DAY.to_string(), "20".to_string()),
        (attr::BIRTH_MONTH.to_string(), "10".to_string()),
    ])
}

pub(crate) fn vaccination(date: &str) -> DccVaccination {
    DccVaccination {
        disease_targeted: DISEASE_TARGETED_COVID_19.to_string(),
        medicinal_product: PRODUCT.to_string(),
        dose_number: 2,
        total_series_of_doses: 2,
        date_of_vaccination: date.to_string(),
        country_of_vaccination: "DE".to_string(),
        ..Default::default()
    }
}

pub(crate) fn negative_test(collected: &str) -> DccTest {
    DccTest {
        disease_targeted: DISEASE_TARGETED_COVID_19.to_string(),
        type_of_test: TEST_TYPE.to_string(),
        date_time_of_collection: collected.to_string(),
        test_result: TEST_RESULT_NOT_DETECTED.to_string(),
        country_of_test: "DE".to_string(),
        ..Default::default()
    }
}

pub(crate) fn recovery(first_positive: &str) -> DccRecovery {
    DccRecovery {
        disease_targeted: DISEASE_TARGETED_COVID_19.to_string(),
        date_of_first_positive_test: first_positive.to_string(),
        country_of_test: "DE".to_string(),
        ..Default::default()
    }
}

fn hcert(dcc: Dcc) -> HealthCertificate {
    HealthCertificate {
        issuer: "DE".to_string(),
        // 2021-06-01T00:00:00Z .. 2022-06-01T00:00:00Z
        issued_at: 1_622_505_600,
        expiration_time: 1_654_041_600,
        dcc,
    }
}

fn dcc() -> Dcc {
    Dcc {
        version: "1.3.0".to_string(),
        date_of_birth: "1990-01-02".to_string(),
        name: DccName {
            family_name: "Doe".to_string(),
            standardized_family_name: "DOE".to_string(),
            given_name: "John".to_string(),
            standardized_given_name: "JOHN".to_string(),
        },
        ..Default::default()
    }
}

pub(crate) fn hcert_with_vaccination(v: DccVaccination) -> HealthCertificate {
    hcert(Dcc { vaccinations: vec![v], ..dcc() })
}

pub(crate) fn hcert_with_test(t: DccTest) -> HealthCertificate {
    hcert(Dcc { tests: vec![t], ..dcc() })
}

pub(crate) fn hcert_with_recovery(r: DccRecovery) -> HealthCertificate {
    hcert(Dcc { recoveries: vec![r], ..dcc() })
}
