use crate::error::ReceiptError;
use crate::models::StoredReceipt;
use crate::store::ReceiptStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// 内存存储 (进程生命周期内保留, 无过期/删除)
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: DashMap<String, StoredReceipt>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn insert(&self, record: StoredReceipt) -> Result<(), ReceiptError> {
        match self.receipts.entry(record.id.clone()) {
            Entry::Occupied(entry) => Err(ReceiptError::DuplicateId(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Option<StoredReceipt> {
        self.receipts.get(id).map(|r| r.value().clone())
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParsedReceipt, Receipt};
    use chrono::Utc;
    use std::sync::Arc;
    use std::thread;

    fn record(id: &str, retailer: &str) -> StoredReceipt {
        let receipt = Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![],
            total: "1.00".to_string(),
        };
        let parsed = ParsedReceipt::try_from(&receipt).unwrap();
        StoredReceipt {
            id: id.to_string(),
            receipt,
            parsed,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.insert(record("a", "Target")).unwrap();
        let found = store.get("a").unwrap();
        assert_eq!(found.id, "a");
        assert_eq!(found.receipt.retailer, "Target");
        assert!(store.get("b").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id_keeps_original() {
        let store = MemoryStore::new();
        store.insert(record("a", "Target")).unwrap();

        let err = store.insert(record("a", "Walgreens")).unwrap_err();
        assert!(matches!(err, ReceiptError::DuplicateId(ref id) if id == "a"));
        assert_eq!(store.get("a").unwrap().receipt.retailer, "Target");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100 {
                        store.insert(record(&format!("{}-{}", t, i), "Target")).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        assert!(store.get("7-99").is_some());
    }
}
