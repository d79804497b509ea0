//! Signature artifacts and their decimal-string boundary form.

use crate::arith::parse_decimal;
use crate::error::Result;

/// A self-describing ElGamal signature.
///
/// Carries the domain parameters and public key alongside `(r, s)`, so it
/// can be verified independently of the engine that produced it. Once
/// produced it is an immutable value that can be copied, serialized and
/// verified any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub prime: u128,
    pub generator: u128,
    pub public_key: u128,
    pub r: u128,
    pub s: u128,
}

/// The decimal-string form of a [`Signature`] together with the signed
/// message: the one data object exchanged with a presentation layer
/// (e.g. copied from a signing panel into a verifying panel).
///
/// Never used for arithmetic; the fields are parsed back into integers
/// before any computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureText {
    pub message: String,
    pub prime: String,
    pub generator: String,
    pub public_key: String,
    pub r: String,
    pub s: String,
}

impl SignatureText {
    /// Renders a signature and its message for display.
    pub fn from_signature(message: &str, signature: &Signature) -> Self {
        SignatureText {
            message: message.to_string(),
            prime: signature.prime.to_string(),
            generator: signature.generator.to_string(),
            public_key: signature.public_key.to_string(),
            r: signature.r.to_string(),
            s: signature.s.to_string(),
        }
    }

    /// Parses the decimal fields back into a verifiable [`Signature`].
    ///
    /// Non-digit characters in any field are skipped; a field whose value
    /// exceeds the 128-bit domain fails with [`crate::Error::Overflow`].
    pub fn to_signature(&self) -> Result<Signature> {
        Ok(Signature {
            prime: parse_decimal(&self.prime)?,
            generator: parse_decimal(&self.generator)?,
            public_key: parse_decimal(&self.public_key)?,
            r: parse_decimal(&self.r)?,
            s: parse_decimal(&self.s)?,
        })
    }
}
