use crate::error::ReceiptError;
use crate::models::{ParsedReceipt, PointsBreakdown, Receipt, StoredReceipt};
use crate::service::scoring;
use crate::store::{MemoryStore, ReceiptStore};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// 收据服务: 提交 (校验 + 分配ID + 存储) 与积分查询
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// 使用内存存储
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// 提交收据, 返回新ID; 校验失败的收据不会写入存储
    pub fn submit(&self, receipt: Receipt) -> Result<String, ReceiptError> {
        let parsed = ParsedReceipt::try_from(&receipt)?;
        let id = Uuid::new_v4().to_string();

        tracing::info!(
            "Receipt {} accepted: retailer={}, items={}, total={}",
            id,
            receipt.retailer,
            receipt.items.len(),
            receipt.total
        );

        self.store.insert(StoredReceipt {
            id: id.clone(),
            receipt,
            parsed,
            submitted_at: Utc::now(),
        })?;

        Ok(id)
    }

    /// 按ID查询收据
    pub fn lookup(&self, id: &str) -> Result<StoredReceipt, ReceiptError> {
        self.store
            .get(id)
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    /// 按ID计算积分 (每次查询重新计算, 不缓存)
    pub fn points(&self, id: &str) -> Result<PointsBreakdown, ReceiptError> {
        let stored = self.lookup(id)?;
        let breakdown = scoring::score(&stored.parsed);
        tracing::debug!("Receipt {} points: {:?}", id, breakdown);
        Ok(breakdown)
    }

    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}
