//! Scrape Flipkart product listing pages into structured records.
//!
//! [`Scraper`] walks a paginated search listing and collects one
//! [`ProductRecord`] per product, together with diagnostics for the
//! pages it had to skip. [`write_csv`] dumps the records as a flat
//! table and the `serve` module answers with them as a JSON array.
//!
//! Feature Flags:
//! - `serde_io`: Enables serde support for the structs. (default)
//! - `serve`: Enables the `/scrape` JSON endpoint. (default)

mod config;
mod export;
mod listing;
mod scrape;
#[cfg(feature = "serve")]
pub mod serve;

use header::{HeaderMap, HeaderValue};
use eyre::Result;
use reqwest::header;

pub use config::ScrapeConfig;
pub use export::write_csv;
pub use listing::{extract_listing, ProductRecord};
pub use scrape::{PageFailure, ScrapeReport, Scraper};
pub use url::Url;

/// Builds the default headers for the client.
fn build_headers(config: &ScrapeConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&config.user_agent)?,
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.accept_language)?,
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    Ok(headers)
}
