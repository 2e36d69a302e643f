//! Error types for account operations and teller sessions.

use thiserror::Error;

/// Result type alias for teller sessions.
pub type Result<T> = std::result::Result<T, TellerError>;

/// Arithmetic on an amount left the representable range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Value was either too large or too small for a Decimal.")]
pub struct AmountOverflow;

/// Reasons a withdrawal is refused.
///
/// Policy checks run in declaration order and only the first failure is
/// reported.
/// A refused withdrawal never changes the balance.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalError {
    /// Requested amount is zero or negative
    #[error("Withdrawal amount must be positive.")]
    InvalidAmount,

    /// Requested amount is above the per-transaction limit
    #[error("Withdrawal limit exceeded.")]
    LimitExceeded,

    /// Requested amount is above the current balance
    #[error("Insufficient funds.")]
    InsufficientFunds,

    /// Debiting would take the balance out of range
    #[error(transparent)]
    Overflow(#[from] AmountOverflow),
}

/// Errors that stop a teller session.
#[derive(Error, Debug)]
pub enum TellerError {
    /// Failed to open or read the script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Initial balance argument is not a number
    #[error("Invalid initial balance '{value}'")]
    InvalidInitialBalance { value: String },

    /// Missing script argument
    #[error("Missing script argument. Usage: bank-proxy <script.csv | -> [initial_balance]")]
    MissingArgument,
}
