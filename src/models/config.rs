// src/models/config.rs

//! Catalog configuration: store endpoint, paging and HTTP client settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Environment variable overriding `store.url`.
pub const ENV_STORE_URL: &str = "CATALOG_STORE_URL";

/// Environment variable overriding `store.api_key`.
pub const ENV_API_KEY: &str = "CATALOG_API_KEY";

/// Settings read from `catalog.toml`, then overlaid by env and flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote course store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Like [`Config::load`], falling back to defaults with a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Overlay endpoint and key from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_STORE_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        );
    }

    /// Overlay endpoint and key; blank values are ignored.
    pub fn apply_overrides(&mut self, url: Option<String>, api_key: Option<String>) {
        if let Some(url) = url.filter(|v| !v.trim().is_empty()) {
            self.store.url = url;
        }
        if let Some(key) = api_key.filter(|v| !v.trim().is_empty()) {
            self.store.api_key = key;
        }
    }

    /// Check everything needed to reach the store is present and well formed.
    pub fn validate(&self) -> Result<()> {
        if self.store.url.trim().is_empty() {
            return Err(AppError::validation(format!(
                "store.url is empty (set it in the config file or {ENV_STORE_URL})"
            )));
        }
        let url = Url::parse(&self.store.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "store.url must be http(s), got {}",
                url.scheme()
            )));
        }
        if self.store.api_key.trim().is_empty() {
            return Err(AppError::validation(format!(
                "store.api_key is empty (set it in the config file or {ENV_API_KEY})"
            )));
        }
        if self.store.table.trim().is_empty() {
            return Err(AppError::validation("store.table is empty"));
        }
        if self.store.page_size == 0 {
            return Err(AppError::validation("store.page_size must be > 0"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Remote store endpoint and paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL (e.g. `https://<project>.supabase.co`)
    #[serde(default)]
    pub url: String,

    /// Public read-only API key
    #[serde(default)]
    pub api_key: String,

    /// Table holding course sections
    #[serde(default = "defaults::table")]
    pub table: String,

    /// Rows requested per page; the server may cap lower
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: defaults::table(),
            page_size: defaults::page_size(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

mod defaults {
    pub fn table() -> String {
        "courses".into()
    }
    pub fn page_size() -> usize {
        1000
    }
    pub fn user_agent() -> String {
        concat!("course-catalog/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }
}
