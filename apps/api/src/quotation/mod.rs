// Print quotation engine: sheet packing, cost composition, binding quotes.
// Pure, synchronous arithmetic. Safe to call on every form change.

pub mod binding;
pub mod cost;
pub mod engine;
pub mod handlers;
pub mod sheet_packer;

// Re-export the public API consumed by the estimators and handlers.
pub use binding::{compute_binding_quotation, BindingQuotationRequest, BindingQuotationResult};
pub use cost::QuotationRates;
pub use engine::{compute_quotation, QuotationRequest, QuotationResult};
