pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{ReceiptError, ValidationError};
pub use service::ReceiptService;
pub use store::{MemoryStore, ReceiptStore};
