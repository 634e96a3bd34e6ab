// src/error.rs

//! Error type shared by the store client, the loader and the CLI.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;

/// Everything that can go wrong while configuring, loading or browsing.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading the config file or the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Store { status: u16, message: String },

    /// A page or probe body did not decode into course rows
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file is not valid TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// `store.url` is not a URL
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A credential could not be encoded as a header value
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Unusable store settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected input or configuration value
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a store error from a status code and response body.
    pub fn store(status: u16, message: impl Into<String>) -> Self {
        Self::Store {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for [`AppError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Shorthand for [`AppError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came from talking to the remote store.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Store { .. })
    }
}
