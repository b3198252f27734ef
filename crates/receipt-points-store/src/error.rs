//! Error types for the store module.

use receipt_points_core::ReceiptId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Attempted to store an absent receipt.
    #[error("receipt cannot be nil")]
    NilReceipt,

    /// No receipt stored under the identifier.
    #[error("receipt with id {0} not found")]
    NotFound(ReceiptId),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
