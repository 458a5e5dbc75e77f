use eyre::{bail, Result};
use reqwest::Client;
use scraper::Html;
use tracing::{info, warn};

use crate::{listing, ProductRecord, ScrapeConfig};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
/// A listing page the run had to skip.
pub struct PageFailure {
    /// 1-based page number within the run.
    pub page: u32,
    /// URL the fetch was issued against.
    pub url: String,
    /// What went wrong.
    pub reason: String,
}

#[derive(Debug, Default)]
/// Product rows and skip diagnostics collected over one run.
pub struct ScrapeReport {
    /// Every extracted row, in page order.
    pub records: Vec<ProductRecord>,
    /// One entry per page that contributed nothing.
    pub failures: Vec<PageFailure>,
}

/// Walks the configured listing pages and accumulates product rows.
///
/// Use `Scraper::new` with a [`ScrapeConfig`] and call `run`.
pub struct Scraper {
    client: Client,
    config: ScrapeConfig,
}

impl Scraper {
    /// Builds the HTTP client with the configured identity headers.
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(crate::build_headers(&config)?)
            .build()?;
        Ok(Scraper { client, config })
    }

    /// Fetches every configured page in order, one at a time, and
    /// extracts its rows.
    ///
    /// A page that cannot be fetched is logged, recorded in the report
    /// and skipped; the run itself only fails on a bad configuration.
    pub async fn run(&self) -> Result<ScrapeReport> {
        let mut report = ScrapeReport::default();
        for (index, url) in self.config.page_urls()?.into_iter().enumerate() {
            let page = index as u32 + 1;
            match self.fetch_page(url.as_str()).await {
                Ok(body) => {
                    let document = Html::parse_document(&body);
                    let mut records = listing::extract_listing(&document);
                    info!(page, url = %url, rows = records.len(), "scraped listing page");
                    report.records.append(&mut records);
                }
                Err(error) => {
                    warn!(page, url = %url, %error, "skipping listing page");
                    report.failures.push(PageFailure {
                        page,
                        url: url.into(),
                        reason: error.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!("unexpected status {status}");
        }
        Ok(response.text().await?)
    }
}
