//! GHash.io mining pool adapter
//!
//! GHash.io only reports hashrate; balances live on CEX.io and are not
//! available through this API. The pool exposes no currency discovery
//! endpoint, so the coin list below is maintained by hand.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::config::ProviderConfig;
use crate::domain::account::{Account, API_KEY, API_SECRET, API_USERNAME};
use crate::domain::fields::FieldSpec;
use crate::domain::hashrate::{FetchResult, MHS_TO_HS};
use crate::domain::provider::MiningProvider;
use crate::infrastructure::nonce::{NonceProvider, UnixTimeNonce};
use crate::infrastructure::signing::{self, SignedRequest};
use crate::infrastructure::throttle::Throttle;
use crate::shared::error::{AccountFetchError, AppError};
use crate::shared::logging::LoggingUtils;

pub const GHASHIO_CODE: &str = "ghashio";

pub const GHASHIO_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(API_USERNAME, "Username", ".+"),
    FieldSpec::new(API_KEY, "API Key", "^[A-Za-z0-9]{20,32}$"),
    FieldSpec::new(API_SECRET, "API Secret", "^[A-Za-z0-9]{20,32}$"),
];

pub const SUPPORTED_CURRENCIES: &[&str] = &["btc", "nmc", "ixc", "dvc"];

/// Adapter for the GHash.io hashrate API
pub struct GHashIoAdapter {
    endpoint_url: String,
    http_client: Client,
    throttle: Arc<dyn Throttle>,
    nonce: Arc<dyn NonceProvider>,
}

impl GHashIoAdapter {
    /// Create a new adapter; `throttle` is shared with every other caller
    /// of the same endpoint
    pub fn new(config: &ProviderConfig, throttle: Arc<dyn Throttle>) -> crate::Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint_url: config.endpoint_url.clone(),
            http_client,
            throttle,
            nonce: Arc::new(UnixTimeNonce::new()),
        })
    }

    /// Replace the nonce source
    pub fn with_nonce_provider(mut self, nonce: Arc<dyn NonceProvider>) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Signed POST payload for `account` using a fresh nonce
    pub fn generate_post_data(&self, account: &Account) -> Result<SignedRequest, AccountFetchError> {
        signing::generate_post_data(account, self.nonce.next_nonce())
    }

    async fn fetch_hashrate(&self, account: &Account) -> Result<FetchResult, AccountFetchError> {
        self.throttle.throttle().await;

        let request = self.generate_post_data(account)?;
        let body = request.to_form_body();
        info!(url = %self.endpoint_url, nonce = request.nonce, "Posting signed hashrate request");
        debug!(body = %body, "Hashrate request body");

        let raw = self.post(body).await?;
        parse_hashrate_response(&raw, SUPPORTED_CURRENCIES)
    }

    /// POST the form body; any non-2xx status keeps the response body
    async fn post(&self, body: String) -> Result<String, AccountFetchError> {
        let response = self
            .http_client
            .post(&self.endpoint_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach GHash.io: {}", e);
                AccountFetchError::from(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read GHash.io response ({}): {}", status, e);
            AccountFetchError::Transport {
                status: Some(status.as_u16()),
                body: None,
                message: format!("Failed to read response body: {}", e),
            }
        })?;

        if !status.is_success() {
            error!("GHash.io returned error status {}: {}", status, text);
            return Err(AccountFetchError::Transport {
                status: Some(status.as_u16()),
                body: Some(text),
                message: format!("HTTP error: {}", status),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl MiningProvider for GHashIoAdapter {
    fn name(&self) -> &'static str {
        "GHash.io"
    }

    fn code(&self) -> &'static str {
        GHASHIO_CODE
    }

    fn url(&self) -> &'static str {
        "https://ghash.io/"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        GHASHIO_FIELDS
    }

    fn fetch_supported_currencies(&self) -> Vec<String> {
        SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect()
    }

    async fn fetch_balances(&self, account: &Account) -> Result<FetchResult, AccountFetchError> {
        let started = Instant::now();
        let name = account.display_name();
        LoggingUtils::log_fetch_start(self.code(), name);

        let result = self.fetch_hashrate(account).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(fetched) => LoggingUtils::log_fetch_success(
                self.code(),
                name,
                fetched.aggregate_hashrate().unwrap_or_default(),
                elapsed_ms,
            ),
            Err(e) => LoggingUtils::log_fetch_error(self.code(), name, e, elapsed_ms),
        }

        result
    }
}

/// Turn a raw response body into a per-currency result.
///
/// `last5m` is the five-minute average in MH/s; the pool sends it either as
/// a JSON number or as a numeric string.
pub fn parse_hashrate_response(raw: &str, currencies: &[&str]) -> Result<FetchResult, AccountFetchError> {
    let json: Value = serde_json::from_str(raw)?;

    match json.get("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => {
            return Err(AccountFetchError::RemoteApplication(message.clone()));
        }
        Some(other) => return Err(AccountFetchError::RemoteApplication(other.to_string())),
    }

    let hashrate = match json.get("last5m") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .map(|mhs| mhs * MHS_TO_HS)
    .filter(|hs| hs.is_finite())
    .ok_or_else(|| AccountFetchError::Malformed(format!("missing or out-of-range last5m in {}", raw)))?;

    Ok(FetchResult::uniform(currencies.iter().copied(), hashrate))
}
