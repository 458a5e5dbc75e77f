use eyre::{Result, WrapErr};
use url::Url;

/// Search listing walked when nothing else is configured.
pub const DEFAULT_BASE_URL: &str =
    "https://www.flipkart.com/search?q=mobiles&otracker=search&otracker1=search&marketplace=FLIPKART&as-show=on&as=off";

/// Client identity presented to the listing host.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Language preference sent with every request.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Listing pages walked per run.
pub const DEFAULT_PAGE_COUNT: u32 = 12;

#[derive(Clone, Debug)]
/// Settings for one scrape run.
///
/// `Default` supplies the compiled-in constants; every entry point
/// takes the whole config so nothing is buried in the pipeline.
pub struct ScrapeConfig {
    /// First listing page; later pages get a `page` query parameter.
    pub base_url: String,
    /// Number of listing pages to walk.
    pub pages: u32,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// `Accept-Language` header value.
    pub accept_language: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.into(),
            pages: DEFAULT_PAGE_COUNT,
            user_agent: DEFAULT_USER_AGENT.into(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.into(),
        }
    }
}

impl ScrapeConfig {
    /// Page URLs in fetch order: the base URL itself, then the base
    /// with `page=N` appended for N in 2..=pages.
    pub fn page_urls(&self) -> Result<Vec<Url>> {
        let base = Url::parse(&self.base_url)
            .wrap_err_with(|| format!("invalid base url {}", self.base_url))?;
        let mut urls = Vec::with_capacity(self.pages as usize);
        if self.pages > 0 {
            urls.push(base.clone());
        }
        for page in 2..=self.pages {
            let mut url = base.clone();
            url.query_pairs_mut().append_pair("page", &page.to_string());
            urls.push(url);
        }
        Ok(urls)
    }
}
