pub mod parse;
pub mod points;
pub mod receipt;

pub use points::PointsBreakdown;
pub use receipt::{Item, ParsedItem, ParsedReceipt, Receipt, StoredReceipt};
