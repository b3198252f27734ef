//! # Receipt Points Core
//!
//! Pure primitives for receipt points: receipts, identifiers, and scoring.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over receipt values.
//!
//! ## Key Types
//!
//! - [`Receipt`] - An immutable purchase record
//! - [`Item`] - A line item on a receipt
//! - [`ReceiptId`] - Opaque identifier a receipt is stored under
//! - [`PointsBreakdown`] - Per-rule contributions to a receipt's points
//!
//! ## Scoring
//!
//! ```rust
//! use chrono::NaiveDate;
//! use receipt_points_core::{score, ReceiptBuilder};
//! use rust_decimal::Decimal;
//!
//! let purchased_at = NaiveDate::from_ymd_opt(2022, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(13, 1, 0)
//!     .unwrap();
//!
//! let receipt = ReceiptBuilder::new("Target", purchased_at)
//!     .item("Mountain Dew 12PK", Decimal::new(649, 2))
//!     .item("Emils Cheese Pizza", Decimal::new(1225, 2))
//!     .total(Decimal::new(3535, 2))
//!     .build();
//!
//! assert_eq!(score(&receipt), 20);
//! ```

pub mod error;
pub mod receipt;
pub mod scoring;
pub mod types;

pub use error::CoreError;
pub use receipt::{Item, Receipt, ReceiptBuilder};
pub use scoring::{breakdown, score, PointsBreakdown};
pub use types::ReceiptId;
