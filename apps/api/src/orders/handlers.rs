//! Axum route handlers for order submission.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::estimate::forms::PriceEstimate;
use crate::orders::relay::{prepare_order, OrderSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub relay_id: Uuid,
    /// The advisory price forwarded with the order.
    pub estimate: PriceEstimate,
    /// Whatever the order backend returned.
    pub order: Value,
}

/// POST /api/v1/orders
pub async fn handle_create_order(
    State(state): State<AppState>,
    Json(submission): Json<OrderSubmission>,
) -> Result<Json<OrderResponse>, AppError> {
    let prepared = prepare_order(&submission, state.pricing(), Utc::now());

    if let Some(client_price) = prepared.client_price_mismatch {
        warn!(
            relay_id = %prepared.relay_id,
            client_price,
            estimated_price = prepared.estimate.estimated_price,
            "client estimate differs from recomputed price; forwarding recomputed price"
        );
    }

    let order = state.orders.create_order(&prepared.payload).await?;
    info!(
        relay_id = %prepared.relay_id,
        product = ?submission.form.product,
        estimated_price = prepared.estimate.estimated_price,
        estimate_available = prepared.estimate.is_available(),
        "order forwarded to order backend"
    );

    Ok(Json(OrderResponse {
        relay_id: prepared.relay_id,
        estimate: prepared.estimate,
        order,
    }))
}
