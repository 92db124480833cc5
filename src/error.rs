//! Argument validation errors.
//!
//! All validation happens before any scanning starts; once a
//! [`ScanParams`](crate::ScanParams) has been constructed, the scan itself
//! cannot fail and runs to completion.

use thiserror::Error;

/// Errors raised while validating scan arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("subgroup order m must be a positive integer")]
    /// The requested subgroup order was zero or negative, leaving the
    /// divisibility condition `(p - 1) % m == 0` undefined.
    NonPositiveOrder,
    #[error("{flag} expects an integer, got `{value}`")]
    /// A numeric command-line argument failed to parse.
    NotAnInteger {
        /// Flag that carried the malformed value.
        flag: &'static str,
        /// Offending input text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::ScanError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScanError::NonPositiveOrder.to_string(),
            "subgroup order m must be a positive integer"
        );
        let err = ScanError::NotAnInteger {
            flag: "--min",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "--min expects an integer, got `abc`");
    }
}
