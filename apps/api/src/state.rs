use std::sync::Arc;

use crate::config::Config;
use crate::estimate::forms::PricingSettings;
use crate::orders::client::OrderGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where confirmed orders are forwarded. Default: `HttpOrderGateway`.
    pub orders: Arc<dyn OrderGateway>,
}

impl AppState {
    pub fn pricing(&self) -> &PricingSettings {
        &self.config.pricing
    }
}
