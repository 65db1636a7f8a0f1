//! Domain layer - provider contract and the models it exchanges
//!
//! Nothing in here performs I/O; the HTTP side lives in the
//! infrastructure layer.

pub mod account;
pub mod fields;
pub mod hashrate;
pub mod provider;
pub mod registry;

pub use account::Account;
pub use fields::{FieldSpec, FieldValidator, FieldViolation};
pub use hashrate::{FetchReport, FetchResult, HashrateRecord};
pub use provider::MiningProvider;
pub use registry::ProviderRegistry;
