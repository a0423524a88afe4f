use thiserror::Error;

/// Errors raised by the layer, the generator and the matrix helpers.
///
/// All of them are contract violations detected before any output is
/// produced; nothing is retried.
#[derive(Debug, Error)]
pub enum NnError {
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NnError>;

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NnError::DimensionMismatch { context, expected, actual })
    }
}
