use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// 收据 (请求体原始格式, 字段全部为字符串)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM, 24小时制
    pub items: Vec<Item>,
    pub total: String,
}

/// 收据明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// 校验后的收据 (金额/日期/时间已解析)
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ParsedItem>,
    pub total: BigDecimal,
}

/// 校验后的收据明细
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedItem {
    pub short_description: String,
    pub price: BigDecimal,
}

/// 存储记录: ID + 收据, 写入后不再修改
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub parsed: ParsedReceipt,
    pub submitted_at: DateTime<Utc>,
}
