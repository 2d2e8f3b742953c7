//! Unified error types for `BudgetWatch`.
//!
//! Validation failures are rejected synchronously before any write happens;
//! storage failures carry the underlying `SeaORM` error.

use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A budget goal was negative or not a finite number.
    #[error("Invalid budget goal: {amount}")]
    InvalidGoal {
        /// The rejected goal value
        amount: f64,
    },

    /// A transaction amount was zero or not a finite number.
    #[error("Invalid transaction amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// An alert id did not resolve to an alert owned by the caller.
    #[error("Alert not found: {id}")]
    AlertNotFound {
        /// The alert id that failed to resolve
        id: i64,
    },

    /// Configuration problem (bad environment, malformed stored value).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Any persistence failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
