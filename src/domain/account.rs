use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::error::AccountFetchError;

pub const API_USERNAME: &str = "api_username";
pub const API_KEY: &str = "api_key";
pub const API_SECRET: &str = "api_secret";

/// Caller-supplied account record: configuration key -> value.
///
/// Providers only read from it; it is never mutated or persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account {
    fields: BTreeMap<String, String>,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Look up a key the provider cannot work without
    pub fn require(&self, key: &'static str) -> Result<&str, AccountFetchError> {
        self.get(key).ok_or(AccountFetchError::MissingField(key))
    }

    /// Username, used to identify the account in logs (never the secret)
    pub fn display_name(&self) -> &str {
        self.get(API_USERNAME).unwrap_or("<unknown>")
    }
}

impl<K, V> FromIterator<(K, V)> for Account
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
