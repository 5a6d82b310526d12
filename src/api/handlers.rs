use crate::api::ApiError;
use crate::models::Receipt;
use crate::service::ReceiptService;
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 提交收据响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// 积分查询响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交收据: POST /receipts/process
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(receipt) = payload?;
    let id = service.submit(receipt)?;
    Ok((StatusCode::OK, Json(ProcessReceiptResponse { id })).into_response())
}

/// 查询积分: GET /receipts/:id/points
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let breakdown = service.points(&id)?;
    Ok(Json(PointsResponse {
        points: breakdown.total(),
    }))
}

/// 查询已提交的收据: GET /receipts/:id
pub async fn get_receipt(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Result<Json<Receipt>, ApiError> {
    let stored = service.lookup(&id)?;
    Ok(Json(stored.receipt))
}
