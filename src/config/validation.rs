//! Configuration validation module
//!
//! Checks that go beyond the validator crate rules: endpoint scheme,
//! throttle consistency, and configured accounts against a provider's
//! field schema. A bad account only disqualifies itself, so account
//! checks are separate from the settings checks.

use std::collections::HashSet;
use validator::Validate;

use crate::config::app_config::{AccountConfig, AppConfig, LoggingConfig, ThrottleConfig};
use crate::domain::fields::FieldValidator;
use crate::shared::error::AppError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the settings shared by every account
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_endpoint_url(&config.provider.endpoint_url)?;
        Self::validate_throttle_config(&config.throttle)?;
        Self::validate_logging_config(&config.logging)?;
        Self::validate_account_labels(&config.accounts)?;

        Ok(())
    }

    /// Validate one account against the provider field schema
    pub fn validate_account(validator: &FieldValidator, account: &AccountConfig) -> crate::Result<()> {
        account
            .validate()
            .map_err(|e| AppError::Validation(format!("Account {}: {}", account.label, e)))?;

        validator
            .validate(&account.to_account())
            .map_err(|e| AppError::Validation(format!("Account {}: {}", account.label, e)))
    }

    /// Validate the provider endpoint URL
    fn validate_endpoint_url(endpoint: &str) -> crate::Result<()> {
        let parsed = url::Url::parse(endpoint)
            .map_err(|e| AppError::Validation(format!("Invalid endpoint URL {}: {}", endpoint, e)))?;

        match parsed.scheme() {
            "https" => Ok(()),
            "http" => match parsed.host_str() {
                // Plain HTTP only for local mock servers
                Some("localhost") | Some("127.0.0.1") => Ok(()),
                _ => Err(AppError::Validation(
                    "Remote endpoint URL must use HTTPS".to_string(),
                )),
            },
            other => Err(AppError::Validation(format!(
                "Endpoint URL must use http or https, got {}",
                other
            ))),
        }
    }

    fn validate_throttle_config(throttle: &ThrottleConfig) -> crate::Result<()> {
        if throttle.enabled && throttle.burst_size > throttle.requests_per_minute {
            return Err(AppError::Validation(
                "Burst size cannot be greater than requests per minute".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !["text", "json"].contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {}",
                logging.format
            )));
        }

        Ok(())
    }

    /// Labels identify accounts in reports, so they must be unique
    fn validate_account_labels(accounts: &[AccountConfig]) -> crate::Result<()> {
        let mut labels = HashSet::new();

        for account in accounts {
            if !labels.insert(account.label.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate account label: {}",
                    account.label
                )));
            }
        }

        Ok(())
    }
}
