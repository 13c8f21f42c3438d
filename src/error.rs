//! Error types for quoting and schedule export

use thiserror::Error;

/// Errors raised while pricing a quote or exporting its schedule
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Input rejected during validation, before any quote exists
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output sink or input file could not be read or written
    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),
}

impl QuoteError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        QuoteError::InvalidInput(message.into())
    }
}

impl From<csv::Error> for QuoteError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return QuoteError::IoFailure(std::io::Error::other(err));
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => QuoteError::IoFailure(io),
            other => QuoteError::IoFailure(std::io::Error::other(format!("{:?}", other))),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: QuoteError = csv::Error::from(io).into();
        match err {
            QuoteError::IoFailure(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_input_message() {
        let err = QuoteError::invalid("Parcelas do contrato deve ser entre 1 e 5.");
        assert_eq!(err.to_string(), "Invalid input: Parcelas do contrato deve ser entre 1 e 5.");
    }
}
