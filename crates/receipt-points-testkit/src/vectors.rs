//! Golden scoring scenarios.
//!
//! Each vector is a receipt written the way it arrives over the wire (text
//! dates, text amounts) together with the points it must score. Every
//! implementation of the scoring rules must agree on all of them.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use receipt_points_core::{score, Receipt, ReceiptBuilder};
use rust_decimal::Decimal;

/// A golden scoring vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub retailer: &'static str,
    /// `YYYY-MM-DD`
    pub purchase_date: &'static str,
    /// `HH:MM`, 24-hour clock.
    pub purchase_time: &'static str,
    /// `(short description, price)` pairs.
    pub items: &'static [(&'static str, &'static str)],
    pub total: &'static str,
    /// Points the receipt must score.
    pub expected_points: u64,
}

/// Get all golden scoring vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "two item target receipt",
            retailer: "Target",
            purchase_date: "2022-01-01",
            purchase_time: "13:01",
            items: &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
            ],
            total: "35.35",
            // 6 retailer + 5 pair + 3 pizza + 6 odd day
            expected_points: 20,
        },
        GoldenVector {
            name: "round total in the afternoon",
            retailer: "Retailer1",
            purchase_date: "2023-10-01",
            purchase_time: "15:00",
            items: &[("Item1", "10.00"), ("Item2", "20.00")],
            total: "100.00",
            expected_points: 9 + 50 + 25 + 5 + 6 + 10,
        },
        GoldenVector {
            name: "half dollar total on an even day",
            retailer: "Retailer2",
            purchase_date: "2023-10-02",
            purchase_time: "15:00",
            items: &[("Item1", "10.00"), ("Item2", "20.00")],
            total: "100.50",
            expected_points: 9 + 25 + 5 + 10,
        },
        GoldenVector {
            name: "round total on an even day",
            retailer: "Retailer3",
            purchase_date: "2023-10-02",
            purchase_time: "15:00",
            items: &[("Item1", "10.00"), ("Item2", "20.00")],
            total: "100.00",
            expected_points: 9 + 50 + 25 + 5 + 10,
        },
        GoldenVector {
            name: "no items",
            retailer: "Retailer4",
            purchase_date: "2023-10-01",
            purchase_time: "15:00",
            items: &[],
            total: "100.00",
            expected_points: 9 + 50 + 25 + 6 + 10,
        },
        GoldenVector {
            name: "five item target receipt",
            retailer: "Target",
            purchase_date: "2022-01-01",
            purchase_time: "13:01",
            items: &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35",
            expected_points: 28,
        },
        GoldenVector {
            name: "corner market gatorade run",
            retailer: "M&M Corner Market",
            purchase_date: "2022-03-20",
            purchase_time: "14:33",
            items: &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            total: "9.00",
            expected_points: 109,
        },
        GoldenVector {
            name: "single quarter-multiple item",
            retailer: "Target",
            purchase_date: "2022-01-02",
            purchase_time: "13:13",
            items: &[("Pepsi - 12-oz", "1.25")],
            total: "1.25",
            expected_points: 6 + 25,
        },
        GoldenVector {
            name: "morning walgreens",
            retailer: "Walgreens",
            purchase_date: "2022-01-02",
            purchase_time: "08:13",
            items: &[("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
            total: "2.65",
            expected_points: 9 + 5 + 1,
        },
        GoldenVector {
            name: "item bonus with an exact product",
            retailer: "A",
            purchase_date: "2022-01-02",
            purchase_time: "10:00",
            // 15.00 * 0.2 is exactly 3; no rounding up.
            items: &[("abc", "15.00")],
            total: "15.00",
            expected_points: 1 + 50 + 25 + 3,
        },
        GoldenVector {
            name: "window boundaries excluded",
            retailer: "Late Shop",
            purchase_date: "2022-01-02",
            purchase_time: "16:00",
            items: &[("Tea", "0.99")],
            total: "0.99",
            // 8 retailer + ceil(0.198) = 1
            expected_points: 8 + 1,
        },
    ]
}

/// Build the receipt a golden vector describes.
///
/// Panics on malformed vector text; vectors are static test data.
pub fn generate_receipt_from_vector(vector: &GoldenVector) -> Receipt {
    let date = NaiveDate::parse_from_str(vector.purchase_date, "%Y-%m-%d")
        .expect("golden vector date");
    let time =
        NaiveTime::parse_from_str(vector.purchase_time, "%H:%M").expect("golden vector time");

    let mut builder = ReceiptBuilder::new(vector.retailer, date.and_time(time))
        .total(Decimal::from_str(vector.total).expect("golden vector total"));

    for (description, price) in vector.items {
        builder = builder.item(
            *description,
            Decimal::from_str(price).expect("golden vector price"),
        );
    }

    builder.build()
}

/// Score every vector and report `(name, passed, detail)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .into_iter()
        .map(|vector| {
            let receipt = generate_receipt_from_vector(&vector);
            let points = score(&receipt);
            let passed = points == vector.expected_points;
            let detail = format!("expected {}, got {}", vector.expected_points, points);
            (vector.name.to_string(), passed, detail)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_generate() {
        for vector in all_vectors() {
            let receipt = generate_receipt_from_vector(&vector);
            assert_eq!(receipt.retailer(), vector.retailer);
            assert_eq!(receipt.items().len(), vector.items.len());
        }
    }

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed, detail) in verify_all_vectors() {
            assert!(passed, "{}: {}", name, detail);
        }
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
