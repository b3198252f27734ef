//! Proptest generators for property-based testing.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use receipt_points_core::{Item, Receipt, ReceiptBuilder, ReceiptId};

/// Generate a random ReceiptId.
pub fn receipt_id() -> impl Strategy<Value = ReceiptId> {
    any::<u128>().prop_map(|bits| ReceiptId::from_uuid(Uuid::from_u128(bits)))
}

/// Generate a non-negative amount with two decimal places.
pub fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generate a retailer name: letters, digits, spaces, and common punctuation.
pub fn retailer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 &'.-]{1,32}".prop_map(String::from)
}

/// Generate an item description, sometimes padded with whitespace.
pub fn description() -> impl Strategy<Value = String> {
    ("[ ]{0,3}", "[A-Za-z0-9 -]{1,30}", "[ ]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{}{}{}", lead, body, trail))
}

/// Generate a line item.
pub fn item() -> impl Strategy<Value = Item> {
    (description(), amount()).prop_map(|(description, price)| Item::new(description, price))
}

/// Generate up to `max_len` line items.
pub fn items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item(), 0..=max_len)
}

/// Generate a purchase timestamp between 2000 and 2099.
pub fn purchased_at() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(
        |(year, month, day, hour, minute)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|date| date.and_hms_opt(hour, minute, 0))
                .unwrap_or_default()
        },
    )
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchased_at: NaiveDateTime,
    pub items: Vec<Item>,
    pub total: Decimal,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (retailer(), purchased_at(), items(12), amount())
            .prop_map(|(retailer, purchased_at, items, total)| ReceiptParams {
                retailer,
                purchased_at,
                items,
                total,
            })
            .boxed()
    }
}

/// Generate a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    ReceiptBuilder::new(params.retailer.clone(), params.purchased_at)
        .items(params.items.clone())
        .total(params.total)
        .build()
}

/// Generate a random receipt.
pub fn receipt() -> impl Strategy<Value = Receipt> {
    any::<ReceiptParams>().prop_map(|params| receipt_from_params(&params))
}
