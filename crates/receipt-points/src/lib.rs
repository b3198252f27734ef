//! # Receipt Points
//!
//! The unified API for receipt points: store purchase receipts under opaque
//! identifiers and score them with a fixed set of rules.
//!
//! ## Overview
//!
//! - **Receipts**: immutable purchase records (retailer, purchase time, items, total)
//! - **Store**: identifier-keyed, concurrency-safe, process-lifetime storage
//! - **Scoring**: a pure function from a receipt to a non-negative point total
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points::{ReceiptId, ReceiptService};
//! use receipt_points::store::MemoryStore;
//! use receipt_points::core::Receipt;
//!
//! async fn example(receipt: Receipt) {
//!     let service = ReceiptService::new(MemoryStore::new());
//!
//!     // The caller mints the identifier.
//!     let id = ReceiptId::generate();
//!     service.store_receipt(id, Some(receipt)).await.unwrap();
//!
//!     let points = service.calculate_points(&id).await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipt types and the scoring engine
//! - `receipt_points::store` - Storage abstraction and in-memory store

pub mod error;
pub mod service;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

// Re-export main types for convenience
pub use error::{Result, ServiceError};
pub use service::ReceiptService;

// Re-export commonly used core types
pub use receipt_points_core::{
    breakdown, score, Item, PointsBreakdown, Receipt, ReceiptBuilder, ReceiptId,
};
pub use receipt_points_store::{InsertResult, MemoryStore, Store};
