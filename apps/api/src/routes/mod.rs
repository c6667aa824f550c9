pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;
use crate::estimate::handlers as estimate;
use crate::orders::handlers as orders;
use crate::quotation::handlers as quotation;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quotation engine
        .route("/api/v1/quotations", post(quotation::handle_quotation))
        .route(
            "/api/v1/quotations/binding",
            post(quotation::handle_binding_quotation),
        )
        // Product-page estimates
        .route("/api/v1/sizes", get(estimate::handle_list_sizes))
        .route("/api/v1/products", get(estimate::handle_list_products))
        .route("/api/v1/estimates", post(estimate::handle_estimate))
        // Order relay
        .route("/api/v1/orders", post(orders::handle_create_order))
        .fallback(not_found)
        .with_state(state)
}

/// CORS for the storefront. No configured origins means any origin is allowed.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'")))
        .collect::<Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
