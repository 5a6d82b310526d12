use crate::error::ValidationError;
use crate::models::{Item, ParsedItem, ParsedReceipt, Receipt};
use bigdecimal::{BigDecimal, Zero};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// 金额只接受普通小数写法 (不接受科学计数法), 整数部分最多 15 位, 小数最多 10 位
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d{1,15}(\.\d{1,10})?$").expect("amount pattern is valid")
});

impl TryFrom<&Receipt> for ParsedReceipt {
    type Error = ValidationError;

    fn try_from(receipt: &Receipt) -> Result<Self, Self::Error> {
        let purchase_date = NaiveDate::parse_from_str(receipt.purchase_date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(receipt.purchase_date.clone()))?;
        let purchase_time = NaiveTime::parse_from_str(receipt.purchase_time.trim(), TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidTime(receipt.purchase_time.clone()))?;

        let items = receipt
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| parse_item(idx, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retailer: receipt.retailer.clone(),
            purchase_date,
            purchase_time,
            items,
            total: parse_amount("total", &receipt.total)?,
        })
    }
}

fn parse_item(idx: usize, item: &Item) -> Result<ParsedItem, ValidationError> {
    Ok(ParsedItem {
        short_description: item.short_description.clone(),
        price: parse_amount(&format!("items[{}].price", idx), &item.price)?,
    })
}

/// 解析非负金额
pub fn parse_amount(field: &str, value: &str) -> Result<BigDecimal, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    };

    let text = value.trim();
    if !AMOUNT_PATTERN.is_match(text) {
        return Err(invalid());
    }
    let amount = BigDecimal::from_str(text).map_err(|_| invalid())?;

    if amount < BigDecimal::zero() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(amount)
}
