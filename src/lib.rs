//! GHash.io hashrate adapter
//!
//! Queries the GHash.io pool API for an account's five-minute hashrate,
//! signing each request with HMAC-SHA256, and reports it per currency for
//! an aggregation platform that polls many providers.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use config::AppConfig;
pub use domain::{Account, FetchResult, MiningProvider, ProviderRegistry};
pub use infrastructure::GHashIoAdapter;
pub use shared::error::{AccountFetchError, AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
