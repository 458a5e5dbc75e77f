use std::error::Error;

use flipkart_listings::{ScrapeConfig, Scraper};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ScrapeConfig {
        pages: 1,
        ..ScrapeConfig::default()
    };
    let report = Scraper::new(config)?.run().await?;
    println!("{:#?}", report.records);
    Ok(())
}
