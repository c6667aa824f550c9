//! Binding Quotation — flat per-unit pricing for binding-only jobs.
//! No sheet layout and no markup: the configured binding price is charged as is.

use serde::{Deserialize, Serialize};

/// Missing fields read as 0, which quotes as "no result".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingQuotationRequest {
    pub copies: i64,
    pub binding_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BindingQuotationResult {
    pub copies: u64,
    pub binding_price: f64,
    pub total: f64,
    pub per_copy: f64,
}

/// Returns `None` when there is nothing to quote: no copies, or a zero / NaN price.
pub fn compute_binding_quotation(
    request: &BindingQuotationRequest,
) -> Option<BindingQuotationResult> {
    if request.copies <= 0 || request.binding_price == 0.0 || request.binding_price.is_nan() {
        return None;
    }
    let copies = request.copies as u64;
    Some(BindingQuotationResult {
        copies,
        binding_price: request.binding_price,
        total: copies as f64 * request.binding_price,
        per_copy: request.binding_price,
    })
}
