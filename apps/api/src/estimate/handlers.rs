//! Axum route handlers for product-page estimates.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::estimate::forms::{estimate_price, PriceEstimate, ProductForm, ProductKind};
use crate::estimate::sizes::{NamedSize, PaperSize, FALLBACK_SIZE, PAPER_SIZES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SizesResponse {
    pub sizes: &'static [NamedSize],
    pub fallback: PaperSize,
}

#[derive(Debug, Serialize)]
pub struct ProductHint {
    pub product: ProductKind,
    pub min_quantity: u32,
}

/// GET /api/v1/sizes
pub async fn handle_list_sizes() -> Json<SizesResponse> {
    Json(SizesResponse {
        sizes: PAPER_SIZES,
        fallback: FALLBACK_SIZE,
    })
}

/// GET /api/v1/products
pub async fn handle_list_products() -> Json<Vec<ProductHint>> {
    let products = [
        ProductKind::CallingCard,
        ProductKind::Flyer,
        ProductKind::Newsletter,
        ProductKind::Binding,
    ];
    Json(
        products
            .into_iter()
            .map(|product| ProductHint {
                product,
                min_quantity: product.min_quantity(),
            })
            .collect(),
    )
}

/// POST /api/v1/estimates
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Json<PriceEstimate> {
    Json(estimate_price(&form, state.pricing()))
}
