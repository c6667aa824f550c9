//! Order preparation — builds the payload sent to the order backend.
//!
//! The `estimated_price` a browser sends is advisory and untrusted. It is
//! always replaced with a price recomputed from the submitted form, and the
//! backend remains free to price the order itself.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::estimate::forms::{estimate_price, PriceEstimate, PricingSettings, ProductForm};

/// Tolerance when comparing a client price against the recomputed one.
const PRICE_EPSILON: f64 = 1e-6;

/// Order as submitted from a product page.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSubmission {
    pub form: ProductForm,
    /// The price the page displayed at submit time, if any.
    #[serde(default)]
    pub estimated_price: Option<f64>,
    /// Everything else on the order (name, address, uploaded file reference, ...),
    /// passed through untouched.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// A payload ready for the order backend.
#[derive(Debug, Clone)]
pub struct PreparedOrder {
    pub relay_id: Uuid,
    pub estimate: PriceEstimate,
    /// Set when the client sent a price that differs from the recomputed one.
    pub client_price_mismatch: Option<f64>,
    pub payload: Map<String, Value>,
}

/// Recomputes the estimate and assembles the outgoing payload.
///
/// Form fields and the recomputed price overwrite same-named attributes.
pub fn prepare_order(
    submission: &OrderSubmission,
    settings: &PricingSettings,
    submitted_at: DateTime<Utc>,
) -> PreparedOrder {
    let estimate = estimate_price(&submission.form, settings);
    let relay_id = Uuid::new_v4();

    let client_price_mismatch = submission
        .estimated_price
        .filter(|client| (client - estimate.estimated_price).abs() > PRICE_EPSILON);

    let form = &submission.form;
    let mut payload = submission.attributes.clone();
    payload.insert("product".to_string(), json!(form.product));
    payload.insert("quantity".to_string(), json!(form.quantity));
    payload.insert("size".to_string(), json!(form.size));
    payload.insert("color".to_string(), json!(form.color));
    payload.insert("back_to_back".to_string(), json!(form.back_to_back));
    if let Some(price) = form.binding_price {
        payload.insert("binding_price".to_string(), json!(price));
    }
    payload.insert(
        "estimated_price".to_string(),
        json!(estimate.estimated_price),
    );
    payload.insert("submitted_at".to_string(), json!(submitted_at.to_rfc3339()));
    payload.insert("relay_id".to_string(), json!(relay_id));

    PreparedOrder {
        relay_id,
        estimate,
        client_price_mismatch,
        payload,
    }
}
