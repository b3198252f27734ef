//! Store trait: the abstract interface for receipt storage.
//!
//! This trait keeps the service storage-agnostic. The only implementation
//! today is the in-memory [`MemoryStore`](crate::MemoryStore).

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};

use crate::error::Result;

/// Result of storing a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Nothing was stored under the identifier before.
    Inserted,
    /// An earlier receipt under the identifier was overwritten.
    Replaced,
}

/// The Store trait: async interface for identifier-keyed receipt storage.
///
/// # Design Notes
///
/// - **Last write wins**: storing under an existing identifier replaces the
///   previous receipt wholesale; nothing is merged.
/// - **No deletion**: entries live as long as the store.
/// - **Short critical sections**: implementations hold their lock for a
///   single map operation and never perform I/O while holding it.
#[async_trait]
pub trait Store: Send + Sync {
    /// Store a receipt under `id`.
    ///
    /// # Returns
    /// - `Inserted` if `id` was new.
    /// - `Replaced` if a previous receipt under `id` was overwritten.
    ///
    /// # Errors
    /// - `NilReceipt` if `receipt` is `None`. The store is left untouched.
    async fn insert_receipt(&self, id: ReceiptId, receipt: Option<Receipt>)
        -> Result<InsertResult>;

    /// Get the receipt stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` if nothing was stored under `id`.
    async fn get_receipt(&self, id: &ReceiptId) -> Result<Receipt>;

    /// Check whether a receipt is stored under `id`.
    async fn has_receipt(&self, id: &ReceiptId) -> Result<bool>;

    /// Number of stored receipts.
    async fn receipt_count(&self) -> Result<usize>;
}
