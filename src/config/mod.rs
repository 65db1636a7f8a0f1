//! Configuration management module
//!
//! This module handles loading, validation, and access to application
//! settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AccountConfig, AppConfig, LoggingConfig, ProviderConfig, ThrottleConfig};
pub use validation::ConfigValidator;
