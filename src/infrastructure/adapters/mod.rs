//! Infrastructure adapters module
//!
//! Provider implementations that talk to external pool APIs, plus the
//! registry wiring for them.

pub mod ghashio;

pub use ghashio::{GHashIoAdapter, GHASHIO_CODE, GHASHIO_FIELDS, SUPPORTED_CURRENCIES};

use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tracing::warn;

use crate::config::{AccountConfig, AppConfig, ConfigValidator};
use crate::domain::fields::FieldValidator;
use crate::domain::hashrate::FetchReport;
use crate::domain::provider::MiningProvider;
use crate::domain::registry::ProviderRegistry;
use crate::infrastructure::throttle::RateLimitThrottle;

/// Registry holding every provider this crate ships, built from `config`
pub fn default_registry(config: &AppConfig) -> crate::Result<ProviderRegistry> {
    let throttle = RateLimitThrottle::from_config(&config.throttle)?;

    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(GHashIoAdapter::new(&config.provider, throttle)?));

    Ok(registry)
}

/// Fetch every account concurrently, one report per account in input order.
///
/// An account that fails the provider's field schema is reported as an error
/// without touching the network; the remaining accounts are still fetched.
pub async fn fetch_reports(
    provider: &dyn MiningProvider,
    accounts: &[AccountConfig],
) -> crate::Result<Vec<FetchReport>> {
    let validator = FieldValidator::new(provider.fields())?;

    let reports = join_all(accounts.iter().map(|account| {
        let checked = ConfigValidator::validate_account(&validator, account);
        async move {
            let outcome = match checked {
                Ok(()) => provider
                    .fetch_balances(&account.to_account())
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => {
                    warn!(account = %account.label, error = %e, "Skipping invalid account");
                    Err(e.to_string())
                }
            };

            FetchReport {
                provider: provider.code().to_string(),
                account: account.label.clone(),
                fetched_at: Utc::now(),
                error: outcome.as_ref().err().cloned(),
                result: outcome.ok(),
            }
        }
    }))
    .await;

    Ok(reports)
}
