//! Strong type definitions for receipt points.
//!
//! Identifiers are newtypes so a receipt key can never be confused with any
//! other string flowing through the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// An opaque receipt identifier.
///
/// Generated once per stored receipt (random UUID v4) by whoever accepts the
/// submission. The core never mints identifiers on its own; it only uses them
/// as keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The nil identifier (all zeros). Never produced by [`ReceiptId::generate`].
    pub const NIL: Self = Self(Uuid::nil());
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0.hyphenated())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CoreError::InvalidReceiptId(s.to_string()))
    }
}

impl From<Uuid> for ReceiptId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_id_string_roundtrip() {
        let id = ReceiptId::generate();
        let parsed: ReceiptId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_receipt_id_generate_is_unique() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert_ne!(a, ReceiptId::NIL);
    }

    #[test]
    fn test_receipt_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<ReceiptId>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidReceiptId(s) if s == "not-a-uuid"));
    }

    #[test]
    fn test_receipt_id_display() {
        let id = ReceiptId::from_uuid(Uuid::from_u128(0xabcd));
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-00000000abcd");
        assert!(format!("{:?}", id).starts_with("ReceiptId("));
    }

    #[test]
    fn test_receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::from_uuid(Uuid::from_u128(1));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
    }
}
