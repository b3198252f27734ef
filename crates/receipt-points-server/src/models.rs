//! JSON documents exchanged over HTTP.
//!
//! Amounts, dates and times travel as strings. Conversion into a typed
//! [`Receipt`] happens here so the core never sees malformed text.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use receipt_points::{Item, Receipt, ReceiptBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A receipt as submitted to `POST /receipts/process` and returned by
/// `GET /receipts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptJson {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemJson>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemJson {
    pub short_description: String,
    pub price: String,
}

impl ReceiptJson {
    /// Check that every required field carries a value.
    pub fn validate(&self) -> Result<(), ApiError> {
        require("retailer", &self.retailer)?;
        require("purchaseDate", &self.purchase_date)?;
        require("purchaseTime", &self.purchase_time)?;
        require("total", &self.total)?;

        if self.items.is_empty() {
            return Err(ApiError::BadRequest("items is required".into()));
        }
        for item in &self.items {
            require("shortDescription", &item.short_description)?;
            require("price", &item.price)?;
        }
        Ok(())
    }

    /// Validate and convert into a typed receipt.
    pub fn into_receipt(self) -> Result<Receipt, ApiError> {
        self.validate()?;

        let date = parse_date(&self.purchase_date);
        let time = parse_time(&self.purchase_time);
        let purchased_at = match (date, time) {
            (Some(date), Some(time)) => date.and_time(time),
            _ => return Err(ApiError::BadRequest("Invalid date or time format".into())),
        };

        let total = parse_amount(&self.total)
            .ok_or_else(|| ApiError::BadRequest("Invalid total amount".into()))?;

        let items = self
            .items
            .into_iter()
            .map(|item| {
                parse_amount(&item.price)
                    .map(|price| Item::new(item.short_description, price))
                    .ok_or_else(|| ApiError::BadRequest("Invalid price format".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReceiptBuilder::new(self.retailer, purchased_at)
            .items(items)
            .total(total)
            .build())
    }
}

impl From<&Receipt> for ReceiptJson {
    fn from(receipt: &Receipt) -> Self {
        Self {
            retailer: receipt.retailer().to_string(),
            purchase_date: receipt.purchase_date().format(DATE_FORMAT).to_string(),
            purchase_time: receipt.purchase_time().format(TIME_FORMAT).to_string(),
            items: receipt
                .items()
                .iter()
                .map(|item| ItemJson {
                    short_description: item.short_description.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
            total: receipt.total().to_string(),
        }
    }
}

/// Response body of `POST /receipts/process`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body of `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Response body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
    pub version: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

// Only canonical text is accepted: whatever parses must format back to the
// exact same string, so a stored receipt reads back unchanged.

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == text)
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == text)
}

/// Parse a non-negative decimal amount written without sign, padding or
/// leading zeros.
fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .filter(|amount| amount.to_string() == text)
}
