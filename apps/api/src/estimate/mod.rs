// Per-product price estimation: maps order-form state onto the quotation engine.
// Recomputed synchronously on every form change; no network, no stored state.

pub mod forms;
pub mod handlers;
pub mod sizes;
