//! The scoring engine: a pure function from a receipt to its points.
//!
//! Points are the sum of independent rules. Each rule contributes a
//! non-negative amount and none of them look at another rule's result, so
//! the order of evaluation does not matter.
//!
//! | rule               | contribution                                              |
//! |--------------------|-----------------------------------------------------------|
//! | retailer           | 1 per letter or decimal digit in the retailer name        |
//! | round dollar       | 50 if the total has no cents                              |
//! | quarter multiple   | 25 if the total is a multiple of 0.25                     |
//! | item pairs         | 5 per two items                                           |
//! | item descriptions  | `ceil(price * 0.2)` per item whose trimmed length % 3 == 0 |
//! | odd day            | 6 if the day of month is odd                              |
//! | afternoon          | 10 if the purchase hour is in `[14, 16)`                  |
//!
//! All amounts are compared with exact decimal arithmetic.

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::receipt::{Item, Receipt};

/// Bonus for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per complete pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Bonus for an odd day of month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for a purchase inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// First hour (inclusive) of the afternoon window.
pub const AFTERNOON_START_HOUR: u32 = 14;

/// Last hour (exclusive) of the afternoon window.
pub const AFTERNOON_END_HOUR: u32 = 16;

/// Trimmed description lengths divisible by this earn the price bonus.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// 0.25
pub const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// 0.2
pub const ITEM_PRICE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Per-rule contributions for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all contributions.
    ///
    /// Saturates instead of overflowing; only absurd item prices get close.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Compute the points for a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Compute each rule's contribution for a receipt.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(receipt.retailer()),
        round_dollar: round_dollar_points(receipt.total()),
        quarter_multiple: quarter_multiple_points(receipt.total()),
        item_pairs: item_pair_points(receipt.items().len()),
        item_descriptions: receipt
            .items()
            .iter()
            .map(item_description_points)
            .fold(0u64, u64::saturating_add),
        odd_day: odd_day_points(receipt),
        afternoon: afternoon_points(receipt),
    }
}

/// One point for every letter or digit in the retailer name.
///
/// A letter is any character in a Unicode `L*` general category and a digit
/// is a decimal digit (`Nd`). Punctuation, symbols, whitespace, combining
/// marks and other numerics such as `½`, `²` or `Ⅻ` do not count, so
/// `"Café 24"` scores 6.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as u64
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

pub fn round_dollar_points(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(total: Decimal) -> u64 {
    if (total % QUARTER).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of
/// three, zero otherwise.
///
/// Length is measured in UTF-8 bytes. An all-whitespace description trims to
/// length zero and therefore qualifies.
pub fn item_description_points(item: &Item) -> u64 {
    if item.trimmed_description().len() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    let bonus = (item.price * ITEM_PRICE_MULTIPLIER).ceil();
    if bonus.is_sign_negative() {
        return 0;
    }
    bonus.to_u64().unwrap_or(u64::MAX)
}

pub fn odd_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date().day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

pub fn afternoon_points(receipt: &Receipt) -> u64 {
    let hour = receipt.purchase_time().hour();
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
