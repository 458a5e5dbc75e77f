//! Minimal JSON surface over the scrape pipeline.
//!
//! One route, `/scrape`, accepting GET or POST with no request-body
//! contract. Every request runs the full pipeline and answers with
//! the record array.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use eyre::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{ProductRecord, ScrapeConfig, Scraper};

/// Router with the single `/scrape` route.
pub fn router(config: ScrapeConfig) -> Router {
    Router::new()
        .route("/scrape", get(scrape).post(scrape))
        .with_state(Arc::new(config))
}

/// Binds `addr` and serves the router until the task is dropped.
pub async fn serve(addr: &str, config: ScrapeConfig) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr, "serving listing scrape endpoint");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

/// Runs the pipeline and answers with the record array.
///
/// No error status ever reaches the caller: a failed page or a broken
/// configuration is logged server-side and the array just comes back
/// shorter, or empty.
async fn scrape(State(config): State<Arc<ScrapeConfig>>) -> Json<Vec<ProductRecord>> {
    let report = match Scraper::new(config.as_ref().clone()) {
        Ok(scraper) => match scraper.run().await {
            Ok(report) => report,
            Err(error) => {
                error!(%error, "scrape run failed");
                return Json(Vec::new());
            }
        },
        Err(error) => {
            error!(%error, "could not build scrape client");
            return Json(Vec::new());
        }
    };
    info!(
        rows = report.records.len(),
        skipped = report.failures.len(),
        "answering scrape request"
    );
    Json(report.records)
}
