//! Provider contract consumed by the polling orchestrator

use async_trait::async_trait;

use super::account::Account;
use super::fields::FieldSpec;
use super::hashrate::FetchResult;
use crate::shared::error::AccountFetchError;

/// A mining pool account provider.
///
/// Implementations hold no per-call mutable state, so one instance may serve
/// concurrent fetches for different accounts.
#[async_trait]
pub trait MiningProvider: Send + Sync {
    /// Display name
    fn name(&self) -> &'static str;

    /// Stable identifier used as the registry key
    fn code(&self) -> &'static str;

    /// Reference URL for the provider
    fn url(&self) -> &'static str;

    /// Account configuration keys this provider reads, in display order
    fn fields(&self) -> &'static [FieldSpec];

    /// Currency codes this provider reports on
    fn fetch_supported_currencies(&self) -> Vec<String>;

    /// Currency codes for which a hashrate is reported
    fn fetch_supported_hashrate_currencies(&self) -> Vec<String> {
        self.fetch_supported_currencies()
    }

    /// Query the pool for one account
    async fn fetch_balances(&self, account: &Account) -> Result<FetchResult, AccountFetchError>;
}
