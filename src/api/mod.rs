pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorResponse};
pub use handlers::*;

use crate::service::ReceiptService;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 构建路由; 非声明方法由 axum 返回 405
pub fn create_router(service: Arc<ReceiptService>) -> Router {
    let receipt_routes = Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id", get(get_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(service);

    Router::new()
        .route("/health", get(health_check))
        .merge(receipt_routes)
        .layer(ServiceBuilder::new())
}
