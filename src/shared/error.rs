//! Error handling module
//!
//! This module provides centralized error handling for the application.
//! Failures of a single account fetch are reported through
//! [`AccountFetchError`]; everything else goes through [`AppError`].

use thiserror::Error;

/// Failure of one account fetch.
///
/// The orchestrator logs these and skips the account for the current cycle;
/// none of them is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountFetchError {
    /// Non-2xx HTTP status or connection failure during the POST.
    ///
    /// Displays the response body when the pool sent one, so the diagnostic
    /// text reaches the caller unchanged.
    #[error("{}", transport_display(.body, .message))]
    Transport {
        status: Option<u16>,
        body: Option<String>,
        message: String,
    },

    /// The pool answered with an `error` field.
    #[error("{0}")]
    RemoteApplication(String),

    /// The response body was not the JSON document we expect.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The account record lacks a required configuration key.
    #[error("Missing account field: {0}")]
    MissingField(&'static str),

    /// The request signature could not be computed.
    #[error("Failed to sign request: {0}")]
    Signing(String),
}

fn transport_display(body: &Option<String>, message: &str) -> String {
    match body {
        Some(body) if !body.is_empty() => body.clone(),
        _ => message.to_string(),
    }
}

impl AccountFetchError {
    /// Short tag used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AccountFetchError::Transport { .. } => "transport",
            AccountFetchError::RemoteApplication(_) => "remote_application",
            AccountFetchError::Malformed(_) => "malformed",
            AccountFetchError::MissingField(_) => "missing_field",
            AccountFetchError::Signing(_) => "signing",
        }
    }

    /// HTTP status that caused a transport failure, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            AccountFetchError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AccountFetchError {
    fn from(err: reqwest::Error) -> Self {
        AccountFetchError::Transport {
            status: err.status().map(|s| s.as_u16()),
            body: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AccountFetchError {
    fn from(err: serde_json::Error) -> Self {
        AccountFetchError::Malformed(err.to_string())
    }
}

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Account fetch failed: {0}")]
    Fetch(#[from] AccountFetchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
