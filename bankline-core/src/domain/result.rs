//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Deposits must be strictly positive
    #[error("Invalid deposit amount: {0}")]
    InvalidDeposit(Decimal),

    /// Covers both non-positive amounts and amounts above the balance;
    /// the session reports them with the same message.
    #[error("Insufficient funds or invalid amount: {0}")]
    InsufficientFunds(Decimal),

    /// The result would fall outside the representable `Decimal` range
    #[error("Amount out of range: {0}")]
    AmountOverflow(Decimal),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
