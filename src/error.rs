//! Error types.
//!
//! - `AppError`: run-level failures carrying a process exit code
//! - `MortgageError`: a field of a mortgage failed validation
//!
//! Exit codes used by the binary:
//! - `2`: I/O or configuration problem (missing feed, unwritable export)
//! - `3`: invalid input to the single-payment command

use thiserror::Error;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<MortgageError> for AppError {
    fn from(err: MortgageError) -> Self {
        AppError::new(3, err.to_string())
    }
}

/// A mortgage field failed validation.
///
/// The messages are part of the output contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MortgageError {
    #[error("Loan Amount must be positive.")]
    InvalidLoanAmount,
    #[error("Rate provided is invalid.")]
    InvalidRate,
    #[error("Frequency provided is invalid.")]
    InvalidFrequency,
    #[error("Amortization provided is invalid.")]
    InvalidAmortization,
}
