//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info, warn};

use crate::shared::error::{AccountFetchError, AppError};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format.
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn initialize(level: &str, format: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::io::stderr);

        let result = if format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log the start of an account fetch
    pub fn log_fetch_start(provider: &str, account: &str) {
        info!(
            provider = %provider,
            account = %account,
            "Fetching account hashrate"
        );
    }

    /// Log a successful fetch
    pub fn log_fetch_success(provider: &str, account: &str, hashrate: f64, duration_ms: u64) {
        info!(
            provider = %provider,
            account = %account,
            hashrate = %hashrate,
            duration_ms = %duration_ms,
            "Account fetch completed"
        );
    }

    /// Log a failed fetch
    pub fn log_fetch_error(provider: &str, account: &str, err: &AccountFetchError, duration_ms: u64) {
        match err {
            AccountFetchError::Transport { .. } => error!(
                provider = %provider,
                account = %account,
                kind = err.kind(),
                status = ?err.status(),
                error = %err,
                duration_ms = %duration_ms,
                "Account fetch failed"
            ),
            _ => warn!(
                provider = %provider,
                account = %account,
                kind = err.kind(),
                error = %err,
                duration_ms = %duration_ms,
                "Account fetch failed"
            ),
        }
    }
}
