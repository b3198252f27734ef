//! Error types for the receipt service.

use receipt_points_core::ReceiptId;
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Attempted to store an absent receipt.
    #[error("receipt cannot be nil")]
    NilReceipt,

    /// No receipt stored under the identifier.
    #[error("receipt with id {0} not found")]
    NotFound(ReceiptId),

    /// Storage failure unrelated to the request itself.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NilReceipt => ServiceError::NilReceipt,
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Store(other),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
