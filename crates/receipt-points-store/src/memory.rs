//! In-memory implementation of the Store trait.
//!
//! Receipts live for as long as the store does. There is no persistence and
//! no eviction.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
///
/// A single `RwLock` guards the whole map. Writers are exclusive, readers
/// share. All data is lost when the store is dropped.
pub struct MemoryStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ReceiptId, Receipt>>> {
        self.receipts
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ReceiptId, Receipt>>> {
        self.receipts
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_receipt(
        &self,
        id: ReceiptId,
        receipt: Option<Receipt>,
    ) -> Result<InsertResult> {
        let receipt = receipt.ok_or(StoreError::NilReceipt)?;

        let previous = self.write()?.insert(id, receipt);

        let result = match previous {
            Some(_) => InsertResult::Replaced,
            None => InsertResult::Inserted,
        };
        debug!(%id, ?result, "stored receipt");
        Ok(result)
    }

    async fn get_receipt(&self, id: &ReceiptId) -> Result<Receipt> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    async fn has_receipt(&self, id: &ReceiptId) -> Result<bool> {
        Ok(self.read()?.contains_key(id))
    }

    async fn receipt_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use proptest::prelude::*;
    use receipt_points_core::ReceiptBuilder;
    use rust_decimal_macros::dec;

    fn make_test_receipt(retailer: &str) -> Receipt {
        let purchased_at = NaiveDate::from_ymd_opt(2022, 1, 1)
            .unwrap()
            .and_hms_opt(13, 1, 0)
            .unwrap();
        ReceiptBuilder::new(retailer, purchased_at)
            .item("Pepsi - 12-oz", dec!(1.25))
            .total(dec!(1.25))
            .build()
    }

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();
        let receipt = make_test_receipt("Walgreens");

        let result = store.insert_receipt(id, Some(receipt.clone())).await.unwrap();
        assert_eq!(result, InsertResult::Inserted);

        let retrieved = store.get_receipt(&id).await.unwrap();
        assert_eq!(retrieved, receipt);
        assert!(store.has_receipt(&id).await.unwrap());
        assert_eq!(store.receipt_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_nil_receipt_leaves_store_untouched() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();

        let err = store.insert_receipt(id, None).await.unwrap_err();
        assert!(matches!(err, StoreError::NilReceipt));
        assert!(!store.has_receipt(&id).await.unwrap());
        assert_eq!(store.receipt_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_memory_store_nil_receipt_keeps_existing_entry() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();
        let receipt = make_test_receipt("Target");
        store.insert_receipt(id, Some(receipt.clone())).await.unwrap();

        assert!(store.insert_receipt(id, None).await.is_err());
        assert_eq!(store.get_receipt(&id).await.unwrap(), receipt);
    }

    #[tokio::test]
    async fn test_memory_store_last_write_wins() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();

        let r1 = store
            .insert_receipt(id, Some(make_test_receipt("First")))
            .await
            .unwrap();
        assert_eq!(r1, InsertResult::Inserted);

        let r2 = store
            .insert_receipt(id, Some(make_test_receipt("Second")))
            .await
            .unwrap();
        assert_eq!(r2, InsertResult::Replaced);

        let stored = store.get_receipt(&id).await.unwrap();
        assert_eq!(stored.retailer(), "Second");
        assert_eq!(store.receipt_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_not_found() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();

        let err = store.get_receipt(&id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
        assert!(!store.has_receipt(&id).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_memory_store_concurrent_inserts() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let id = ReceiptId::generate();
                    let receipt = make_test_receipt(&format!("Retailer{}", i));
                    store.insert_receipt(id, Some(receipt.clone())).await.unwrap();
                    assert_eq!(store.get_receipt(&id).await.unwrap(), receipt);
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.receipt_count().await.unwrap(), 64);
    }

    proptest! {
        /// Any mix of stores and nil stores leaves the map holding the last
        /// receipt stored under each id.
        #[test]
        fn last_store_per_id_wins(
            ops in prop::collection::vec((0usize..4, prop::option::of("[A-Za-z]{1,8}")), 0..32)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let ids: Vec<ReceiptId> = (0..4).map(|_| ReceiptId::generate()).collect();
            let store = MemoryStore::new();
            let mut model: HashMap<ReceiptId, Receipt> = HashMap::new();

            runtime.block_on(async {
                for (slot, retailer) in &ops {
                    let id = ids[*slot];
                    let receipt = retailer.as_deref().map(make_test_receipt);
                    let result = store.insert_receipt(id, receipt.clone()).await;

                    match receipt {
                        Some(receipt) => {
                            let expected = if model.insert(id, receipt).is_some() {
                                InsertResult::Replaced
                            } else {
                                InsertResult::Inserted
                            };
                            assert_eq!(result.unwrap(), expected);
                        }
                        None => assert!(matches!(result, Err(StoreError::NilReceipt))),
                    }
                }

                assert_eq!(store.receipt_count().await.unwrap(), model.len());
                for id in &ids {
                    match model.get(id) {
                        Some(receipt) => assert_eq!(&store.get_receipt(id).await.unwrap(), receipt),
                        None => assert!(matches!(
                            store.get_receipt(id).await,
                            Err(StoreError::NotFound(missing)) if missing == *id
                        )),
                    }
                }
            });
        }
    }
}
