use bigdecimal::{BigDecimal, ToPrimitive};
use crate::models::{ParsedItem, ParsedReceipt, PointsBreakdown};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// 下午加分时段 [14:00, 16:00)
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// 计算收据总积分
pub fn compute_points(receipt: &ParsedReceipt) -> u64 {
    score(receipt).total()
}

/// 计算每条规则的得分 (七条规则相互独立, 结果相加即总积分)
pub fn score(receipt: &ParsedReceipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(&receipt.items),
        item_descriptions: item_description_points(&receipt.items),
        odd_day: odd_day_points(receipt.purchase_date),
        afternoon: afternoon_points(receipt.purchase_time),
    }
}

/// 商户名中每个 ASCII 字母或数字计 1 分
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 总额为整数金额 (无小数部分) 计 50 分
pub fn round_dollar_points(total: &BigDecimal) -> u64 {
    if is_integer(total) {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 总额为 0.25 的整数倍计 25 分
pub fn quarter_multiple_points(total: &BigDecimal) -> u64 {
    let quarters = total.clone() * BigDecimal::from(4);
    if is_integer(&quarters) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 每两个商品计 5 分
pub fn item_pair_points(items: &[ParsedItem]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// 描述去除首尾空白后长度 (字节数) 为 3 的倍数时, 计 price * 0.2 向上取整
pub fn item_description_points(items: &[ParsedItem]) -> u64 {
    let factor = BigDecimal::new(2.into(), 1); // 0.2
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| ceil_to_u64(&(item.price.clone() * factor.clone())))
        .fold(0u64, u64::saturating_add)
}

/// 购买日期为奇数日计 6 分
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 购买时间在 14:00 (含) 到 16:00 (不含) 之间计 10 分, 忽略分钟
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if AFTERNOON_HOURS.contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

fn is_integer(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

/// 非负数向上取整; with_scale(0) 向零截断
fn ceil_to_u64(value: &BigDecimal) -> u64 {
    let truncated = value.with_scale(0);
    let ceiled = if truncated < *value {
        truncated + BigDecimal::from(1)
    } else {
        truncated
    };
    ceiled.to_u64().unwrap_or(u64::MAX)
}
