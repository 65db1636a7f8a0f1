//! Shared utilities and common functionality
//!
//! This module contains error handling and logging helpers used across
//! the crate.

pub mod error;
pub mod logging;

pub use error::{AccountFetchError, AppError, AppResult};
pub use logging::LoggingUtils;
