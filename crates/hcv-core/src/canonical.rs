//! # Canonical Serialization: Signing Inputs
//!
//! `CanonicalBytes` is the only form in which attribute sets and certificate
//! envelopes are signed or verified. Issuer and verifier may build the
//! signed structure independently (different field order, different JSON
//! writers); canonicalization makes both sides hash the same bytes.
//!
//! ## Rules
//!
//! 1. **Reject floats.** Numeric claims are integers (epoch seconds, dose
//!    numbers) or strings. Floats have ambiguous JCS encodings.
//! 2. **RFC 8785 output.** Sorted keys, compact separators, UTF-8.
//!
//! The inner `Vec<u8>` is private: the only constructors apply both rules.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    ///
    /// # Errors
    ///
    /// `FloatRejected` if the value contains a non-integer number;
    /// `SerializationFailed` if the value cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        Self::from_value(serde_json::to_value(obj)?)
    }

    /// Canonicalize an already-built JSON value.
    pub fn from_value(value: Value) -> Result<Self, CanonicalizationError> {
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => {
            Err(CanonicalizationError::FloatRejected(n.as_f64().unwrap_or(f64::NAN)))
        }
        Value::Array(items) => items.iter().try_for_each(reject_floats),
        Value::Object(map) => map.values().try_for_each(reject_floats),
        _ => Ok(()),
    }
}
