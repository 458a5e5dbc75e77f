use eyre::Result;
use flipkart_listings::{write_csv, ScrapeConfig, Scraper};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // logs go to stderr so the CSV dump on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let scraper = Scraper::new(ScrapeConfig::default())?;
    let report = scraper.run().await?;
    info!(
        rows = report.records.len(),
        skipped = report.failures.len(),
        "scrape finished"
    );
    write_csv(std::io::stdout().lock(), &report.records)?;
    Ok(())
}
