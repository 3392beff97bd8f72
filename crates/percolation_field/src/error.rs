//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, calls made out of order on a generator, and numeric failures
//! while building the spectral kernel.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn display_prefixes_variant_context() {
        let err = Error::Precondition("no clusters computed yet".into());
        assert_eq!(err.to_string(), "precondition failed: no clusters computed yet");

        let err = Error::InvalidConfig("rows must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: rows must be > 0");
    }
}
