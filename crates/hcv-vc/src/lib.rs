//! # hcv-vc: International Health Certificates
//!
//! Models the certificate an external signature verifier hands to the rule
//! engine, plus the pieces of parsing that belong to the data model rather
//! than to policy:
//!
//! - **Certificate** (`hcert.rs`): [`HealthCertificate`] metadata and the
//!   embedded [`Dcc`] payload with its name, date of birth and statement
//!   groups, using the compact DCC field names on the wire.
//!
//! - **Statement** (`statement.rs`): [`Statement`], the single health event
//!   a certificate attests to. [`Dcc::statement()`] enforces that exactly one
//!   of the three statement groups holds exactly one entry.
//!
//! - **Date of birth** (`dob.rs`): [`DateOfBirth`], the closed set of
//!   accepted granularities produced by one parser.
//!
//! - **Envelope** (`envelope.rs`): the [`CertificateVerifier`] seam and an
//!   Ed25519 reference envelope (`HC1:` prefix) with matching signer.

pub mod dob;
pub mod envelope;
pub mod hcert;
pub mod statement;

pub use dob::{DateOfBirth, DateOfBirthError};
pub use envelope::{
    CertificateEnvelope, CertificateError, CertificateSigner, CertificateVerifier,
    Ed25519CertificateVerifier, INTERNATIONAL_PREFIX,
};
pub use hcert::{Dcc, DccName, DccRecovery, DccTest, DccVaccination, HealthCertificate};
pub use statement::{Statement, StatementCountError};

/// `expirationTime` value that marks a specimen certificate.
pub const SPECIMEN_EXPIRATION_TIME: i64 = 42;

/// SNOMED CT code for COVID-19, the only accepted `diseaseTargeted`.
pub const DISEASE_TARGETED_COVID_19: &str = "840539006";

/// SNOMED CT code for a "not detected" test result.
pub const TEST_RESULT_NOT_DETECTED: &str = "260415000";
