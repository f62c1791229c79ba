//! Page fetching
//!
//! This module provides the HTTP side of the program: one GET per page with a
//! fixed timeout, failing on any non-success status, and the printer that turns
//! a fetched package page into plain text.

use log::{debug, info};
use scraper::Html;
use std::{io::Write, time::Duration};

use crate::{
    errors::AppError,
    html::{extract_title, extract_user_input_blocks, write_package},
};

/// Root of the stable BLFS book
pub const BASE_URL: &str = "https://www.linuxfromscratch.org/blfs/view/stable";

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every request of a run
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Root URL that chapter identifiers are appended to
    pub base_url: String,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fetches BLFS pages and prints package instructions
#[derive(Debug)]
pub struct PageFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl PageFetcher {
    /// Create a fetcher with a client configured from `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: FetchSettings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    /// Fetch a page and parse it as HTML
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails or times out
    /// - The server answers with a non-success status
    /// - The body cannot be read
    pub async fn fetch_document(&self, url: &str) -> Result<Html, AppError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(url, status));
        }

        let content = response.text().await?;
        Ok(Html::parse_document(&content))
    }

    /// Fetch a package page and write its title and command blocks to `out`
    ///
    /// Nothing is written for a page that fails to fetch or has no `h1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the page has no `h1`, or writing
    /// to `out` fails.
    pub async fn print_package<W: Write>(&self, url: &str, out: &mut W) -> Result<(), AppError> {
        info!("Fetching package page {}", url);

        let document = self.fetch_document(url).await?;
        let title = extract_title(&document)?.ok_or_else(|| AppError::MissingHeading {
            url: url.to_string(),
        })?;
        let blocks = extract_user_input_blocks(&document)?;

        if blocks.is_empty() {
            debug!("No command blocks in {}", title);
        }

        write_package(out, &title, &blocks)?;
        Ok(())
    }
}
