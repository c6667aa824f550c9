//! Axum route handlers for the Quotation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::quotation::{
    compute_binding_quotation, compute_quotation, BindingQuotationRequest,
    BindingQuotationResult, QuotationRates, QuotationRequest, QuotationResult,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Sheet-fed quotation request. Omitted rates and flags take the shop's configured values.
/// Omitted dimensions or copies read as 0, which quotes as `null`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub copies: i64,
    #[serde(default)]
    pub colored: bool,
    #[serde(default)]
    pub back_to_back: bool,
    pub paper_cost: Option<f64>,
    pub plate_price: Option<f64>,
    pub run_price: Option<f64>,
    pub multiplier: Option<f64>,
    pub reject_oversized: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// `null` when the request cannot be quoted yet.
    pub quotation: Option<QuotationResult>,
}

#[derive(Debug, Serialize)]
pub struct BindingQuoteResponse {
    pub quotation: Option<BindingQuotationResult>,
}

impl QuoteRequest {
    fn into_quotation_request(
        self,
        shop_rates: &QuotationRates,
        shop_reject_oversized: bool,
    ) -> QuotationRequest {
        let rates = QuotationRates {
            paper_cost: self.paper_cost.unwrap_or(shop_rates.paper_cost),
            plate_price: self.plate_price.unwrap_or(shop_rates.plate_price),
            run_price: self.run_price.unwrap_or(shop_rates.run_price),
            multiplier: self.multiplier.unwrap_or(shop_rates.multiplier),
        };
        QuotationRequest::new(self.width, self.height, self.copies, self.colored)
            .back_to_back(self.back_to_back)
            .with_rates(rates)
            .reject_oversized(self.reject_oversized.unwrap_or(shop_reject_oversized))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quotations
pub async fn handle_quotation(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let pricing = state.pricing();
    let request = req.into_quotation_request(&pricing.rates, pricing.reject_oversized);
    Json(QuoteResponse {
        quotation: compute_quotation(&request),
    })
}

/// POST /api/v1/quotations/binding
pub async fn handle_binding_quotation(
    Json(req): Json<BindingQuotationRequest>,
) -> Json<BindingQuoteResponse> {
    Json(BindingQuoteResponse {
        quotation: compute_binding_quotation(&req),
    })
}
