use eyre::Result;
use flipkart_listings::{serve, ScrapeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    serve::serve("0.0.0.0:5000", ScrapeConfig::default()).await
}
