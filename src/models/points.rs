/// 积分明细 - 每条规则的得分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// 总积分
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(*p))
    }
}
