use thiserror::Error;

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the signature engine and its number-theory helpers.
///
/// A failed signature verification is *not* an error; `verify` returns
/// `false` for that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation was called before a required parameter or key was set.
    #[error("precondition failed: {0}")]
    Precondition(&'static str),

    /// A bounded search scanned its whole candidate space without success.
    #[error("search exhausted: {0}")]
    SearchExhausted(&'static str),

    /// A value does not fit the 128-bit arithmetic domain, or a domain
    /// parameter is large enough that modular products would overflow it.
    #[error("value exceeds the 128-bit arithmetic domain")]
    Overflow,
}
