//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Receipts with the points they must score
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Ready-made receipts and a store-backed fixture
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_testkit::vectors::{all_vectors, generate_receipt_from_vector};
//! use receipt_points_core::score;
//!
//! for vector in all_vectors() {
//!     let receipt = generate_receipt_from_vector(&vector);
//!     assert_eq!(score(&receipt), vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::{ReceiptParams, receipt_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn score_is_deterministic(params: ReceiptParams) {
//!         let r1 = receipt_from_params(&params);
//!         let r2 = receipt_from_params(&params);
//!         prop_assert_eq!(score(&r1), score(&r2));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receipt_points_testkit::fixtures::{target_receipt, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let receipt = target_receipt();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    cents, empty_items_receipt, purchased_at, round_total_receipt, target_receipt, TestFixture,
};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, generate_receipt_from_vector, verify_all_vectors, GoldenVector};
