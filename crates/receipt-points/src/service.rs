//! The receipt service: stores receipts by id and scores them on request.
//!
//! The service owns the store behind an `Arc` so one instance can be shared
//! by every request handler in the process.

use std::sync::Arc;

use receipt_points_core::{breakdown, score, PointsBreakdown, Receipt, ReceiptId};
use receipt_points_store::{InsertResult, Store};
use tracing::{debug, info};

use crate::error::Result;

/// The main service struct.
///
/// Provides:
/// - Storing receipts under caller-supplied identifiers
/// - Fetching stored receipts
/// - Scoring stored receipts
pub struct ReceiptService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> ReceiptService<S> {
    /// Create a new service over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a service over a store that is already shared.
    pub fn with_shared_store(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Storage Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a receipt under `id`, replacing any earlier receipt.
    pub async fn store_receipt(
        &self,
        id: ReceiptId,
        receipt: Option<Receipt>,
    ) -> Result<InsertResult> {
        let result = self.store.insert_receipt(id, receipt).await?;
        if result == InsertResult::Replaced {
            info!(%id, "replaced stored receipt");
        }
        Ok(result)
    }

    /// Get the receipt stored under `id`.
    pub async fn get_receipt(&self, id: &ReceiptId) -> Result<Receipt> {
        Ok(self.store.get_receipt(id).await?)
    }

    /// Number of stored receipts.
    pub async fn receipt_count(&self) -> Result<usize> {
        Ok(self.store.receipt_count().await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Compute the points for the receipt stored under `id`.
    pub async fn calculate_points(&self, id: &ReceiptId) -> Result<u64> {
        let receipt = self.store.get_receipt(id).await?;
        let points = score(&receipt);
        debug!(%id, points, "scored receipt");
        Ok(points)
    }

    /// Per-rule contributions for the receipt stored under `id`.
    pub async fn points_breakdown(&self, id: &ReceiptId) -> Result<PointsBreakdown> {
        let receipt = self.store.get_receipt(id).await?;
        Ok(breakdown(&receipt))
    }
}

impl<S: Store> Clone for ReceiptService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    use chrono::NaiveDate;
    use receipt_points_core::ReceiptBuilder;
    use receipt_points_store::MemoryStore;
    use rust_decimal_macros::dec;

    fn sample_receipt(retailer: &str, day: u32) -> Receipt {
        let purchased_at = NaiveDate::from_ymd_opt(2023, 10, day)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        ReceiptBuilder::new(retailer, purchased_at)
            .item("Item1", dec!(10.00))
            .item("Item2", dec!(20.00))
            .total(dec!(100.00))
            .build()
    }

    #[tokio::test]
    async fn test_store_then_score_matches_direct_score() {
        let service = ReceiptService::new(MemoryStore::new());
        let id = ReceiptId::generate();
        let receipt = sample_receipt("Retailer1", 1);

        service.store_receipt(id, Some(receipt.clone())).await.unwrap();

        let points = service.calculate_points(&id).await.unwrap();
        assert_eq!(points, score(&receipt));
        assert_eq!(points, 105);

        // Repeatable.
        assert_eq!(service.calculate_points(&id).await.unwrap(), points);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let service = ReceiptService::new(MemoryStore::new());
        let id = ReceiptId::generate();

        let err = service.calculate_points(&id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(missing) if missing == id));

        let err = service.get_receipt(&id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_nil_receipt_rejected() {
        let service = ReceiptService::new(MemoryStore::new());
        let id = ReceiptId::generate();

        let err = service.store_receipt(id, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::NilReceipt));
        assert_eq!(service.receipt_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_restore_overwrites_score() {
        let service = ReceiptService::new(MemoryStore::new());
        let id = ReceiptId::generate();

        let first = sample_receipt("Retailer1", 1);
        let second = sample_receipt("Retailer3", 2);

        assert_eq!(
            service.store_receipt(id, Some(first)).await.unwrap(),
            InsertResult::Inserted
        );
        assert_eq!(
            service.store_receipt(id, Some(second.clone())).await.unwrap(),
            InsertResult::Replaced
        );

        assert_eq!(service.calculate_points(&id).await.unwrap(), score(&second));
        assert_eq!(service.calculate_points(&id).await.unwrap(), 50 + 25 + 5 + 10 + 9);
    }

    #[tokio::test]
    async fn test_breakdown_total_matches_points() {
        let service = ReceiptService::new(MemoryStore::new());
        let id = ReceiptId::generate();
        service
            .store_receipt(id, Some(sample_receipt("Retailer1", 1)))
            .await
            .unwrap();

        let b = service.points_breakdown(&id).await.unwrap();
        assert_eq!(b.total(), service.calculate_points(&id).await.unwrap());
        assert_eq!(b.afternoon, 10);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let service = ReceiptService::new(MemoryStore::new());
        let other = service.clone();
        let id = ReceiptId::generate();

        service
            .store_receipt(id, Some(sample_receipt("Retailer1", 1)))
            .await
            .unwrap();
        assert_eq!(other.get_receipt(&id).await.unwrap().retailer(), "Retailer1");
    }
}
