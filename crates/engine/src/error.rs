//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`EmptyTitle`] returned when an item draft has no title.
//! - [`InvalidAmount`] returned when an amount cannot be parsed or is negative.
//! - [`KeyNotFound`] returned when an item is not found.
//! - [`DuplicateId`] returned when a seeded ledger contains the same id twice.
//! - [`UnsupportedCurrency`] returned when a currency code is not known.
//!
//! Every fallible ledger operation leaves the ledger untouched when it fails,
//! so callers are free to ignore the error and keep the previous state.
//!
//!  [`EmptyTitle`]: EngineError::EmptyTitle
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`DuplicateId`]: EngineError::DuplicateId
//!  [`UnsupportedCurrency`]: EngineError::UnsupportedCurrency
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    DuplicateId(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
