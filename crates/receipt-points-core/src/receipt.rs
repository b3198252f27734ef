//! Receipt: a purchase record submitted for scoring.
//!
//! A receipt is immutable once built. Changing a stored receipt means storing
//! a new value under the same identifier.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description as printed on the receipt.
    pub short_description: String,

    /// Item price. Non-negative.
    pub price: Decimal,
}

impl Item {
    /// Create a new item.
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }

    /// Description with leading and trailing whitespace removed.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

/// A complete purchase receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    retailer: String,
    purchased_at: NaiveDateTime,
    items: Vec<Item>,
    total: Decimal,
}

impl Receipt {
    /// Name of the retailer.
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Purchase date and time, exactly as printed (no timezone).
    pub fn purchased_at(&self) -> NaiveDateTime {
        self.purchased_at
    }

    /// Purchase date.
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchased_at.date()
    }

    /// Purchase time of day.
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchased_at.time()
    }

    /// Line items in the order they appear.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Receipt total.
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Builder for constructing receipts.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    retailer: String,
    purchased_at: NaiveDateTime,
    items: Vec<Item>,
    total: Decimal,
}

impl ReceiptBuilder {
    /// Start a receipt for `retailer` purchased at `purchased_at`.
    pub fn new(retailer: impl Into<String>, purchased_at: NaiveDateTime) -> Self {
        Self {
            retailer: retailer.into(),
            purchased_at,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Append a line item.
    pub fn item(mut self, short_description: impl Into<String>, price: Decimal) -> Self {
        self.items.push(Item::new(short_description, price));
        self
    }

    /// Replace all line items.
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Set the total.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// Finish building.
    pub fn build(self) -> Receipt {
        Receipt {
            retailer: self.retailer,
            purchased_at: self.purchased_at,
            items: self.items,
            total: self.total,
        }
    }
}
