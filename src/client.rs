//! HTTP client shared by the spreadsheet and INSPIRE lookups.

use crate::error::{BibError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default Google Sheets host.
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://docs.google.com";
/// Default INSPIRE-HEP REST API root.
pub const DEFAULT_INSPIRE_BASE_URL: &str = "https://inspirehep.net/api";
/// Per-request timeout for every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("inspire-bib/", env!("CARGO_PKG_VERSION"));

/// Async client that downloads spreadsheets and talks to INSPIRE.
///
/// Cloning is cheap; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> inspire_bib::error::Result<()> {
/// let client = inspire_bib::BibClient::new();
/// let bibtex = client.generate_bibtex("1AbCdEfGhIjKlMnOp").await?;
/// println!("{}", bibtex);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BibClient {
    pub(crate) http: Client,
    pub(crate) sheets_base_url: String,
    pub(crate) inspire_base_url: String,
}

impl Default for BibClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BibClient {
    /// Create a client pointing at the public Google Sheets and INSPIRE hosts.
    pub fn new() -> Self {
        Self {
            http: build_http(DEFAULT_TIMEOUT),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            inspire_base_url: DEFAULT_INSPIRE_BASE_URL.to_string(),
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Override the spreadsheet host (useful for testing).
    pub fn with_sheets_base_url(mut self, url: impl Into<String>) -> Self {
        self.sheets_base_url = url.into();
        self
    }

    /// Override the INSPIRE API root (useful for testing or mirrors).
    pub fn with_inspire_base_url(mut self, url: impl Into<String>) -> Self {
        self.inspire_base_url = url.into();
        self
    }

    /// GET a URL and return the body as text.
    pub(crate) async fn get(&self, url: Url) -> Result<String> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        handle_response(response).await
    }
}

fn build_http(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Append path segments and query pairs to a base URL.
///
/// Segments are percent-encoded individually, so an identifier containing
/// `/` or `?` stays inside its own segment.
pub(crate) fn endpoint(base: &str, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| BibError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Handle the HTTP response, mapping status codes to errors.
async fn handle_response(response: reqwest::Response) -> Result<String> {
    let status = response.status().as_u16();

    match status {
        200..=299 => Ok(response.text().await?),
        404 => Err(BibError::NotFound(response.url().to_string())),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(BibError::Api {
                status,
                message: body,
            })
        }
    }
}
