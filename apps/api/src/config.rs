use anyhow::{ensure, Context, Result};

use crate::estimate::forms::PricingSettings;
use crate::quotation::cost::{
    DEFAULT_MULTIPLIER, DEFAULT_PAPER_COST, DEFAULT_PLATE_PRICE, DEFAULT_RUN_PRICE,
};
use crate::quotation::QuotationRates;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external order backend (orders are POSTed to `/orders/create`).
    pub order_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Browser origins allowed by CORS. Empty allows any origin (local development).
    pub cors_origins: Vec<String>,
    pub pricing: PricingSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let rates = QuotationRates {
            paper_cost: rate_env("PAPER_COST", DEFAULT_PAPER_COST)?,
            plate_price: rate_env("PLATE_PRICE", DEFAULT_PLATE_PRICE)?,
            run_price: rate_env("RUN_PRICE", DEFAULT_RUN_PRICE)?,
            multiplier: rate_env("MARKUP_MULTIPLIER", DEFAULT_MULTIPLIER)?,
        };

        Ok(Config {
            order_api_url: require_env("ORDER_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_origins: parse_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())?,
            pricing: PricingSettings {
                rates,
                reject_oversized: parse_bool(
                    "REJECT_OVERSIZED",
                    std::env::var("REJECT_OVERSIZED").ok().as_deref(),
                )?,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn rate_env(key: &str, default: f64) -> Result<f64> {
    parse_rate(key, std::env::var(key).ok().as_deref(), default)
}

/// Parses an optional rate override; rates must be positive and finite.
fn parse_rate(key: &str, raw: Option<&str>, default: f64) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    ensure!(
        value.is_finite() && value > 0.0,
        "{key} must be a positive number, got {value}"
    );
    Ok(value)
}

/// Comma-separated origin list, e.g. `https://shop.example,https://admin.shop.example`.
fn parse_origins(raw: Option<&str>) -> Result<Vec<String>> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();
    ensure!(
        !origins.iter().any(|o| o == "*"),
        "CORS_ALLOWED_ORIGINS must list origins; leave it unset to allow any origin"
    );
    Ok(origins)
}

fn parse_bool(key: &str, raw: Option<&str>) -> Result<bool> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("0") | Some("false") | Some("no") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some(other) => anyhow::bail!("{key} must be true or false, got '{other}'"),
    }
}
