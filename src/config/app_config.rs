//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::account::{Account, API_KEY, API_SECRET, API_USERNAME};
use crate::shared::error::AppError;

/// Default GHash.io hashrate endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://cex.io/api/ghash.io/hashrate";

/// Upstream provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderConfig {
    /// Hashrate endpoint URL
    #[validate(url)]
    pub endpoint_url: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,

    /// User-Agent header sent with every request
    #[validate(length(min = 1))]
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("ghashio-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Throttle applied before every upstream request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ThrottleConfig {
    /// Requests per minute across all accounts
    #[validate(range(min = 1, max = 10000))]
    pub requests_per_minute: u32,

    /// Burst size
    #[validate(range(min = 1, max = 1000))]
    pub burst_size: u32,

    /// Enable throttling
    pub enabled: bool,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 30,
            burst_size: 1,
            enabled: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format ("text" or "json")
    #[validate(length(min = 1))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// A configured pool account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccountConfig {
    /// Free-form label used in reports
    #[validate(length(min = 1))]
    pub label: String,

    #[validate(length(min = 1))]
    pub api_username: String,

    #[validate(length(min = 1))]
    pub api_key: String,

    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub api_secret: String,
}

impl AccountConfig {
    /// Convert into the provider-facing account record
    pub fn to_account(&self) -> Account {
        Account::new()
            .with(API_USERNAME, self.api_username.as_str())
            .with(API_KEY, self.api_key.as_str())
            .with(API_SECRET, self.api_secret.as_str())
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Throttle configuration
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Accounts to fetch
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("GHASHIO").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config
            .validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        Ok(config)
    }

    /// Validate every section except the individual accounts
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.provider.validate()?;
        self.throttle.validate()?;
        self.logging.validate()?;
        // Accounts are validated one by one before they are fetched

        Ok(())
    }
}
