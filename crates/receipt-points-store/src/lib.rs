//! # Receipt Points Store
//!
//! Storage abstraction for receipt points. Provides a trait-based interface
//! for identifier-keyed receipt storage with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - Process-lifetime in-memory storage
//! - [`InsertResult`] - Whether a store call inserted or replaced
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points_store::{InsertResult, MemoryStore, Store};
//! use receipt_points_core::{Receipt, ReceiptId};
//!
//! async fn example(receipt: Receipt) {
//!     let store = MemoryStore::new();
//!     let id = ReceiptId::generate();
//!
//!     let result = store.insert_receipt(id, Some(receipt)).await.unwrap();
//!     assert_eq!(result, InsertResult::Inserted);
//!
//!     let stored = store.get_receipt(&id).await.unwrap();
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Overwrite on re-store**: storing under a known id replaces the receipt
//! - **Absent receipts rejected**: `None` yields [`StoreError::NilReceipt`]
//! - **Missing ids**: lookups of unknown ids yield [`StoreError::NotFound`]

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, Store};
