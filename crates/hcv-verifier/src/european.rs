//! # International Verification Path
//!
//! Runs after the signature collaborator has verified and decoded the
//! certificate:
//!
//! 1. Certificates issued by the local country are handed back to the
//!    caller undecided; the domestic scheme owns those holders.
//! 2. Certificate metadata: issuance and expiry consistency, or the
//!    specimen sentinel.
//! 3. DCC: date of birth shape, name presence, statement count, then the
//!    business rules for the single statement.
//! 4. Normalization into [`VerificationDetails`].

use hcv_core::{Timestamp, ValidationError};
use hcv_vc::{
    CertificateError, CertificateVerifier, Dcc, DccName, DateOfBirth, DateOfBirthError,
    HealthCertificate, Statement, StatementCountError, SPECIMEN_EXPIRATION_TIME,
};
use thiserror::Error;

use crate::config::{EuropeanVerificationRules, VerifierConfig};
use crate::details::VerificationDetails;
use crate::rules::{validate_statement, StatementError};

/// Certificate metadata that is inconsistent or out of date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HcertError {
    #[error("cannot be issued after it expires")]
    IssuedAfterExpiry,

    #[error("is issued after the current time")]
    IssuedInFuture,

    #[error("is not valid anymore; was valid until {expiration_time}")]
    Expired { expiration_time: i64 },

    #[error("timestamp out of range")]
    InvalidTime(#[source] ValidationError),
}

/// Validate certificate metadata at `now`.
///
/// Returns whether the certificate is a specimen. Specimens carry the
/// expiry sentinel and skip the time checks.
pub fn validate_hcert(hcert: &HealthCertificate, now: Timestamp) -> Result<bool, HcertError> {
    if hcert.expiration_time == SPECIMEN_EXPIRATION_TIME {
        return Ok(true);
    }

    let issued_at = Timestamp::from_epoch_secs(hcert.issued_at).map_err(HcertError::InvalidTime)?;
    let expires = Timestamp::from_epoch_secs(hcert.expiration_time).map_err(HcertError::InvalidTime)?;

    if expires < issued_at {
        return Err(HcertError::IssuedAfterExpiry);
    }
    if now < issued_at {
        return Err(HcertError::IssuedInFuture);
    }
    if expires < now {
        return Err(HcertError::Expired {
            expiration_time: hcert.expiration_time,
        });
    }

    Ok(false)
}

/// A DCC payload that fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DccError {
    #[error("invalid date of birth: {0}")]
    DateOfBirth(#[from] DateOfBirthError),

    #[error("invalid name: either the standardized family name or given name must be present")]
    Name,

    #[error("invalid statement amount: {0}")]
    StatementAmount(#[from] StatementCountError),

    #[error("invalid vaccination statement: {0}")]
    Vaccination(#[source] StatementError),

    #[error("invalid test statement: {0}")]
    Test(#[source] StatementError),

    #[error("invalid recovery statement: {0}")]
    Recovery(#[source] StatementError),
}

fn validate_name(name: &DccName) -> Result<(), DccError> {
    if name.standardized_family_name.is_empty() && name.standardized_given_name.is_empty() {
        return Err(DccError::Name);
    }
    Ok(())
}

/// Validate the DCC payload and its single statement at `now`.
pub fn validate_dcc(dcc: &Dcc, rules: &EuropeanVerificationRules, now: Timestamp) -> Result<(), DccError> {
    DateOfBirth::parse(&dcc.date_of_birth)?;
    validate_name(&dcc.name)?;

    let statement = dcc.statement()?;
    tracing::debug!(statement = statement.kind(), "validating statement");
    validate_statement(statement, rules, now).map_err(|e| match statement {
        Statement::Vaccination(_) => DccError::Vaccination(e),
        Statement::Test(_) => DccError::Test(e),
        Statement::Recovery(_) => DccError::Recovery(e),
    })
}

/// Failure on the international path.
#[derive(Error, Debug)]
pub enum EuropeanError {
    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error("could not validate health certificate: {0}")]
    Hcert(#[from] HcertError),

    #[error("could not validate DCC: {0}")]
    Dcc(#[from] DccError),

    #[error("could not build verification details: {0}")]
    Details(#[from] DateOfBirthError),
}

/// Result of a successful pass through the international path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EuropeanOutcome {
    /// Issued by the local country; not evaluated further.
    LocalIssuer,
    Verified(VerificationDetails),
}

/// Verify an international payload (prefix included) at `now`.
pub fn verify_european(
    payload: &[u8],
    now: Timestamp,
    config: &VerifierConfig,
    certificates: &impl CertificateVerifier,
) -> Result<EuropeanOutcome, EuropeanError> {
    let hcert = certificates.verify_and_decode(payload, &config.european_issuers)?;

    if config.local_country_code.matches(&hcert.issuer) {
        return Ok(EuropeanOutcome::LocalIssuer);
    }

    let is_specimen = validate_hcert(&hcert, now)?;
    validate_dcc(&hcert.dcc, &config.european_rules, now)?;

    let details = VerificationDetails::from_european(&hcert, is_specimen)?;
    Ok(EuropeanOutcome::Verified(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        fixture, hcert_with_recovery, hcert_with_test, hcert_with_vaccination, negative_test, recovery,
        rules, ts, vaccination,
    };
    use hcv_vc::Ed25519CertificateVerifier;

    fn now() -> Timestamp {
        ts("2021-07-01T12:00:00Z")
    }

    // ── Metadata ─────────────────────────────────────────────────────

    #[test]
    fn hcert_within_validity_is_not_specimen() {
        let hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        assert_eq!(validate_hcert(&hcert, now()), Ok(false));
    }

    #[test]
    fn hcert_specimen_skips_time_checks() {
        let mut hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        hcert.expiration_time = SPECIMEN_EXPIRATION_TIME;
        assert_eq!(validate_hcert(&hcert, now()), Ok(true));
    }

    #[test]
    fn hcert_time_failures() {
        let mut hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        hcert.expiration_time = hcert.issued_at - 1;
        assert_eq!(validate_hcert(&hcert, now()), Err(HcertError::IssuedAfterExpiry));

        let hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        assert_eq!(
            validate_hcert(&hcert, ts("2021-05-01T00:00:00Z")),
            Err(HcertError::IssuedInFuture)
        );
        assert_eq!(
            validate_hcert(&hcert, ts("2022-07-01T00:00:00Z")),
            Err(HcertError::Expired {
                expiration_time: hcert.expiration_time
            })
        );
    }

    // ── DCC ──────────────────────────────────────────────────────────

    #[test]
    fn dcc_rejects_malformed_date_of_birth() {
        let mut hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        hcert.dcc.date_of_birth = "1890-01-01".to_string();
        let err = validate_dcc(&hcert.dcc, &rules(), now()).unwrap_err();
        assert!(matches!(err, DccError::DateOfBirth(_)));
        assert!(!err.to_string().contains("1890"));
    }

    #[test]
    fn dcc_requires_one_standardized_name() {
        let mut hcert = hcert_with_test(negative_test("2021-07-01T02:00:00Z"));
        hcert.dcc.name.standardized_given_name.clear();
        assert!(validate_dcc(&hcert.dcc, &rules(), now()).is_ok());

        hcert.dcc.name.standardized_family_name.clear();
        assert_eq!(validate_dcc(&hcert.dcc, &rules(), now()), Err(DccError::Name));
    }

    #[test]
    fn dcc_statement_count_is_checked_before_rules() {
        let mut hcert = hcert_with_test(negative_test("not a time"));
        hcert.dcc.vaccinations.push(vaccination("2021-01-01"));
        let err = validate_dcc(&hcert.dcc, &rules(), now()).unwrap_err();
        assert!(matches!(err, DccError::StatementAmount(StatementCountError::TooMany { .. })));

        hcert.dcc.vaccinations.clear();
        hcert.dcc.tests.clear();
        let err = validate_dcc(&hcert.dcc, &rules(), now()).unwrap_err();
        assert_eq!(err, DccError::StatementAmount(StatementCountError::None));
    }

    #[test]
    fn dcc_statement_errors_name_the_statement_kind() {
        let hcert = hcert_with_vaccination(vaccination("2021-06-30"));
        let err = validate_dcc(&hcert.dcc, &rules(), now()).unwrap_err();
        assert!(err.to_string().starts_with("invalid vaccination statement: "));

        let hcert = hcert_with_recovery(recovery("2021-06-30"));
        let err = validate_dcc(&hcert.dcc, &rules(), now()).unwrap_err();
        assert!(err.to_string().starts_with("invalid recovery statement: "));
    }

    // ── Full path ────────────────────────────────────────────────────

    #[test]
    fn verified_certificate_yields_details() {
        let fx = fixture();
        let payload = fx.signer.sign(&hcert_with_test(negative_test("2021-07-01T02:00:00Z"))).unwrap();
        let outcome = verify_european(&payload, now(), &fx.config, &Ed25519CertificateVerifier).unwrap();
        let EuropeanOutcome::Verified(details) = outcome else {
            panic!("expected verified outcome");
        };
        assert_eq!(details.credential_version, "1");
        assert_eq!(details.issuer_country_code, None);
    }

    #[test]
    fn local_issuer_short_circuits_validation() {
        let fx = fixture();
        let mut hcert = hcert_with_test(negative_test("not a time"));
        hcert.issuer = "NL".to_string();
        hcert.expiration_time = 0;
        let payload = fx.signer.sign(&hcert).unwrap();
        let outcome = verify_european(&payload, now(), &fx.config, &Ed25519CertificateVerifier).unwrap();
        assert_eq!(outcome, EuropeanOutcome::LocalIssuer);
    }

    #[test]
    fn metadata_failure_is_prefixed() {
        let fx = fixture();
        let payload = fx.signer.sign(&hcert_with_test(negative_test("2021-07-01T02:00:00Z"))).unwrap();
        let err = verify_european(&payload, ts("2023-01-01T00:00:00Z"), &fx.config, &Ed25519CertificateVerifier)
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("could not validate health certificate: is not valid anymore"));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let fx = fixture();
        let payload = fx.signer.sign(&hcert_with_test(negative_test("2021-07-01T02:00:00Z"))).unwrap();
        let tampered = String::from_utf8(payload).unwrap().replace("JOHN", "JANE");
        let err = verify_european(tampered.as_bytes(), now(), &fx.config, &Ed25519CertificateVerifier)
            .unwrap_err();
        assert!(matches!(err, EuropeanError::Certificate(CertificateError::InvalidSignature(_))));
    }
}
