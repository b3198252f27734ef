//! Routes and request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use receipt_points::{ReceiptId, ReceiptService, Store};
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::models::{HealthResponse, PointsResponse, ProcessResponse, ReceiptJson};

/// Build the HTTP router over `service`.
///
/// | method | path                    |
/// |--------|-------------------------|
/// | POST   | `/receipts/process`     |
/// | GET    | `/receipts/{id}/points` |
/// | GET    | `/receipts/{id}`        |
/// | GET    | `/health`               |
pub fn router<S: Store + 'static>(service: ReceiptService<S>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/{id}/points", get(get_points::<S>))
        .route("/receipts/{id}", get(get_receipt::<S>))
        .route("/health", get(health::<S>))
        .with_state(service)
}

/// Validate a submitted receipt, store it under a fresh id, and return the id.
#[instrument(skip_all)]
async fn process_receipt<S: Store>(
    State(service): State<ReceiptService<S>>,
    payload: Result<Json<ReceiptJson>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(request) = payload?;
    let receipt = request.into_receipt()?;

    let id = ReceiptId::generate();
    service.store_receipt(id, Some(receipt)).await?;
    info!(%id, "processed receipt");

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

#[instrument(skip(service))]
async fn get_points<S: Store>(
    State(service): State<ReceiptService<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    let points = service.calculate_points(&id).await?;
    debug!(%id, points, "points lookup");
    Ok(Json(PointsResponse { points }))
}

#[instrument(skip(service))]
async fn get_receipt<S: Store>(
    State(service): State<ReceiptService<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ReceiptJson>, ApiError> {
    let id = parse_id(&raw_id)?;
    let receipt = service.get_receipt(&id).await?;
    Ok(Json(ReceiptJson::from(&receipt)))
}

async fn health<S: Store>(
    State(service): State<ReceiptService<S>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let receipts = service.receipt_count().await?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
        receipts,
        version: env!("CARGO_PKG_VERSION").into(),
    }))
}

/// Ids that are not UUIDs can never have been issued, so they are reported
/// exactly like unknown ones.
fn parse_id(raw: &str) -> Result<ReceiptId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("receipt with id {} not found", raw)))
}
