//! Error types for the receipt points core.

use thiserror::Error;

/// Core errors that can occur while handling receipt primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid receipt id: {0}")]
    InvalidReceiptId(String),
}
