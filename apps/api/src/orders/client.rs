/// Order API client — the single point of entry for calls to the external
/// order backend (`POST {ORDER_API_URL}/orders/create`).
///
/// The backend owns order storage and authoritative pricing; this client only
/// delivers the payload and reports what came back.
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const CREATE_ORDER_PATH: &str = "/orders/create";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum OrderApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Order backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

impl OrderApiError {
    /// True when the backend refused the order itself (a 4xx other than 429),
    /// as opposed to being unreachable or overloaded.
    pub fn is_rejection(&self) -> bool {
        matches!(self, OrderApiError::Api { status, .. }
            if (400..500).contains(status) && !is_retryable(*status))
    }
}

fn is_retryable(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Destination for confirmed orders. Implement this to swap the backend
/// without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn OrderGateway>`.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submits one order payload and returns the backend's JSON response.
    async fn create_order(&self, payload: &Map<String, Value>) -> Result<Value, OrderApiError>;
}

#[derive(Debug, Deserialize)]
struct BackendError {
    message: Option<String>,
    error: Option<String>,
}

/// reqwest-backed gateway with retry on 429 and 5xx.
#[derive(Clone)]
pub struct HttpOrderGateway {
    client: Client,
    create_url: String,
    retry_backoff: Duration,
}

impl HttpOrderGateway {
    pub fn new(base_url: &str) -> Result<Self, OrderApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            create_url: format!("{}{CREATE_ORDER_PATH}", base_url.trim_end_matches('/')),
            retry_backoff: RETRY_BACKOFF,
        })
    }

    /// Overrides the first retry delay; later retries double it.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn create_url(&self) -> &str {
        &self.create_url
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, payload: &Map<String, Value>) -> Result<Value, OrderApiError> {
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s
                let delay = self.retry_backoff * (1 << (attempt - 1));
                warn!(
                    "Order submission attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.create_url).json(payload).send().await {
                Ok(r) => r,
                Err(e) => {
                    warn!("Order API request failed: {e}");
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status.as_u16()) {
                let body = response.text().await.unwrap_or_default();
                warn!("Order API returned {}: {}", status, body);
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(OrderApiError::Api {
                    status: status.as_u16(),
                    message: backend_error_message(body),
                });
            }

            let body = response.text().await?;
            debug!("Order API accepted order ({} bytes)", body.len());
            return parse_response_body(&body);
        }

        Err(OrderApiError::Unavailable {
            retries: MAX_RETRIES,
        })
    }
}

/// Pulls a readable message out of a backend error body, falling back to the raw text.
fn backend_error_message(body: String) -> String {
    serde_json::from_str::<BackendError>(&body)
        .ok()
        .and_then(|e| e.message.or(e.error))
        .unwrap_or(body)
}

/// An empty success body is reported as `null`.
fn parse_response_body(body: &str) -> Result<Value, OrderApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
