use std::collections::BTreeMap;
use std::sync::Arc;

use super::provider::MiningProvider;
use crate::shared::error::{AppError, AppResult};

/// Registry of providers keyed by their code
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: BTreeMap<&'static str, Arc<dyn MiningProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any previous one with the same code
    pub fn register(&mut self, provider: Arc<dyn MiningProvider>) {
        self.providers.insert(provider.code(), provider);
    }

    pub fn get(&self, code: &str) -> AppResult<Arc<dyn MiningProvider>> {
        self.providers
            .get(code)
            .cloned()
            .ok_or_else(|| AppError::UnknownProvider(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
