//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use receipt_points_core::{Receipt, ReceiptBuilder, ReceiptId};
use receipt_points_store::{MemoryStore, Store};
use rust_decimal::Decimal;

/// A test fixture with an empty memory store.
pub struct TestFixture {
    pub store: MemoryStore,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Store `receipt` under a fresh identifier and return the identifier.
    pub async fn store(&self, receipt: Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        self.store
            .insert_receipt(id, Some(receipt))
            .await
            .expect("memory store insert");
        id
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a purchase timestamp.
///
/// Panics on an impossible date or time.
pub fn purchased_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid purchase timestamp")
}

/// Amount from an integer number of cents.
pub fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// Target, two items, 35.35 on an odd day before the afternoon window.
/// Scores 20.
pub fn target_receipt() -> Receipt {
    ReceiptBuilder::new("Target", purchased_at(2022, 1, 1, 13, 1))
        .item("Mountain Dew 12PK", cents(649))
        .item("Emils Cheese Pizza", cents(1225))
        .total(cents(3535))
        .build()
}

/// Round 100.00 total, two items, odd day, inside the afternoon window.
/// Scores 105.
pub fn round_total_receipt() -> Receipt {
    ReceiptBuilder::new("Retailer1", purchased_at(2023, 10, 1, 15, 0))
        .item("Item1", cents(1000))
        .item("Item2", cents(2000))
        .total(cents(10000))
        .build()
}

/// Same as [`round_total_receipt`] but with no items. Scores 100.
pub fn empty_items_receipt() -> Receipt {
    ReceiptBuilder::new("Retailer4", purchased_at(2023, 10, 1, 15, 0))
        .total(cents(10000))
        .build()
}
