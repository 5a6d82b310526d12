pub mod memory;

pub use memory::MemoryStore;

use crate::error::ReceiptError;
use crate::models::StoredReceipt;

/// 收据存储接口 (按ID插入/查询), 实现需保证并发安全
pub trait ReceiptStore: Send + Sync {
    /// 插入新记录; ID 已存在时返回 DuplicateId, 原记录不变
    fn insert(&self, record: StoredReceipt) -> Result<(), ReceiptError>;

    fn get(&self, id: &str) -> Option<StoredReceipt>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
