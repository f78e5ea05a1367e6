//! # Cryptographic Error Types

use thiserror::Error;

/// Errors from cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Ed25519 signature verification failed.
    #[error("Ed25519 verification failed: {0}")]
    VerificationFailed(String),

    /// Invalid Ed25519 signature encoding.
    #[error("invalid Ed25519 signature: {0}")]
    InvalidSignature(String),

    /// Invalid Ed25519 public key.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// No trusted key is registered under the given identifier.
    #[error("unknown issuer key id {0:?}")]
    UnknownKeyId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_id_display_quotes_id() {
        let err = CryptoError::UnknownKeyId("abcd".to_string());
        assert_eq!(format!("{err}"), "unknown issuer key id \"abcd\"");
    }

    #[test]
    fn verification_failed_display() {
        let err = CryptoError::VerificationFailed("bad sig".to_string());
        assert!(format!("{err}").contains("bad sig"));
    }
}
