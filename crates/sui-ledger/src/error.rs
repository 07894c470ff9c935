//! Error type of the conversion pipeline.
//!
//! All errors originate at the I/O boundary ([`RecordReader`][crate::reader::RecordReader]
//! and [`TransactionWriter`][crate::writer::TransactionWriter]). Classification itself
//! never fails.

use thiserror::Error;

/// Main conversion error.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Underlying read, write or open failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing error (bad quoting, invalid UTF-8, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row does not have the fixed export width.
    #[error("Invalid record at line {line}: expected {expected} fields, got {actual}")]
    FieldCount {
        /// Line number in the input (1-based).
        line: u64,
        /// Required number of fields.
        expected: usize,
        /// Number of fields found in the row.
        actual: usize,
    },
}

/// Convenience alias for `Result` with [`ConvertError`].
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_message() {
        let err = ConvertError::FieldCount { line: 4, expected: 12, actual: 11 };
        assert_eq!(err.to_string(), "Invalid record at line 4: expected 12 fields, got 11");
    }

    #[test]
    fn test_io_error_message() {
        let err = ConvertError::from(std::io::Error::other("disk gone"));
        assert!(matches!(err, ConvertError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
