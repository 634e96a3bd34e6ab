// src/services/source.rs

//! Remote course store access.
//!
//! The store is a PostgREST table (as served by Supabase). Only two
//! capabilities are used: reading one ordered page of rows, and a
//! count-with-results probe for checking connectivity.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_RANGE, HeaderMap};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, CourseSection, StoreConfig};
use crate::utils::http::{auth_headers, create_async_client};

/// One sort key of a store query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub ascending: bool,
}

impl SortKey {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Order every page is requested in. Fixed so offsets stay stable between
/// requests.
pub const CATALOG_ORDER: &[SortKey] = &[
    SortKey::desc("term"),
    SortKey::asc("subject"),
    SortKey::asc("course_number"),
];

/// Render sort keys as a PostgREST `order` parameter.
pub fn order_param(keys: &[SortKey]) -> String {
    keys.iter()
        .map(|k| format!("{}.{}", k.column, if k.ascending { "asc" } else { "desc" }))
        .collect::<Vec<_>>()
        .join(",")
}

/// Window of rows `[offset, offset + limit - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub offset: usize,
    pub limit: usize,
}

impl PageRange {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Inclusive last row index.
    pub fn end(&self) -> usize {
        (self.offset + self.limit).saturating_sub(1)
    }
}

/// Result of a connectivity probe.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    /// Exact row count, when the store reported one
    pub total: Option<u64>,
    /// First row, if any
    pub sample: Option<CourseSection>,
}

/// A store that can serve course sections page by page.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Fetch one page of rows in [`CATALOG_ORDER`].
    async fn fetch_page(&self, range: PageRange) -> Result<Vec<CourseSection>>;

    /// Fetch one row along with the exact row count.
    async fn probe(&self) -> Result<ProbeReport>;
}

#[async_trait]
impl<T: CourseSource + ?Sized> CourseSource for &T {
    async fn fetch_page(&self, range: PageRange) -> Result<Vec<CourseSection>> {
        (**self).fetch_page(range).await
    }

    async fn probe(&self) -> Result<ProbeReport> {
        (**self).probe().await
    }
}

/// [`CourseSource`] backed by a PostgREST endpoint.
pub struct PostgrestSource {
    client: Client,
    table_url: Url,
    headers: HeaderMap,
}

impl PostgrestSource {
    /// Create a source with an existing HTTP client.
    pub fn new(client: Client, store: &StoreConfig) -> Result<Self> {
        Ok(Self {
            client,
            table_url: table_url(&store.url, &store.table)?,
            headers: auth_headers(&store.api_key)?,
        })
    }

    /// Create a source and its HTTP client from the full configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = create_async_client(&config.http)?;
        Self::new(client, &config.store)
    }

    fn page_url(&self, range: PageRange) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", &order_param(CATALOG_ORDER))
            .append_pair("offset", &range.offset.to_string())
            .append_pair("limit", &range.limit.to_string());
        url
    }

    fn probe_url(&self) -> Url {
        let mut url = self.table_url.clone();
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("limit", "1");
        url
    }

    async fn get(&self, url: Url, count_exact: bool) -> Result<reqwest::Response> {
        log::debug!("GET {url}");
        let mut request = self.client.get(url).headers(self.headers.clone());
        if count_exact {
            request = request.header("Prefer", "count=exact");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = store_message(&body)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| "request failed".to_string());
            return Err(AppError::store(status.as_u16(), message));
        }
        Ok(response)
    }
}

#[async_trait]
impl CourseSource for PostgrestSource {
    async fn fetch_page(&self, range: PageRange) -> Result<Vec<CourseSection>> {
        let response = self.get(self.page_url(range), false).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn probe(&self) -> Result<ProbeReport> {
        let response = self.get(self.probe_url(), true).await?;
        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);
        let bytes = response.bytes().await?;
        let rows: Vec<CourseSection> = serde_json::from_slice(&bytes)?;

        Ok(ProbeReport {
            total,
            sample: rows.into_iter().next(),
        })
    }
}

/// `{base}/rest/v1/{table}`
fn table_url(base: &str, table: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("store.url cannot be a base URL: {base}")))?
        .pop_if_empty()
        .extend(["rest", "v1", table]);
    Ok(url)
}

/// Total from a `Content-Range` header such as `0-0/1234` or `*/0`.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

/// Message from a PostgREST error body, falling back to the raw text.
fn store_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or(body);
    Some(message.to_string())
}
