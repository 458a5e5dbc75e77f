// tests/pipeline.rs
//
// Drives the whole pipeline against a local stub listing host. No
// HTTP-mocking crate: the stub is a real listener on 127.0.0.1.
#![cfg(feature = "serve")]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::{routing::get, Router};
use flipkart_listings::{ScrapeConfig, Scraper};

// Two products per page, all markers present.
const LISTING_PAGE: &str = r#"
<html><body>
<div class="XQDdHH">4.3</div>
<span class="Wphh3N">1,23,456 Ratings &amp; 12,345 Reviews</span>
<div data-id="MOBA">
  <div class="KzDlHZ">Alpha 5G (Titanium Blue, 128 GB)</div>
  <div class="Nx9bqj _4b5DiR">₹13,999</div>
  <ul class="G4BRas">
    <li class="J+igdf">8 GB RAM | 128 GB ROM</li>
    <li class="J+igdf">16.76 cm (6.6 inch) FHD+ Display</li>
    <li class="J+igdf">50MP + 2MP | 8MP Front Camera</li>
    <li class="J+igdf">5000 mAh Battery</li>
    <li class="J+igdf">Dimensity 6100+ Processor</li>
  </ul>
</div>
<div data-id="MOBB">
  <div class="KzDlHZ">Beta Prime (Black, 64 GB)</div>
  <div class="Nx9bqj _4b5DiR">₹8,499</div>
  <ul class="G4BRas">
    <li class="J+igdf">4 GB RAM | 64 GB ROM</li>
    <li class="J+igdf">16.51 cm (6.5 inch) HD+ Display</li>
    <li class="J+igdf">13MP Rear Camera</li>
    <li class="J+igdf">5000 mAh Battery</li>
    <li class="J+igdf">Helio G36 Processor</li>
  </ul>
</div>
</body></html>
"#;

#[derive(Clone)]
struct Stub {
    requests: Arc<Mutex<Vec<String>>>,
    fail_page: Option<&'static str>,
}

async fn listing(
    State(stub): State<Stub>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
) -> Response {
    stub.requests.lock().unwrap().push(uri.to_string());
    if stub.fail_page.is_some() && params.get("page").map(String::as_str) == stub.fail_page {
        (StatusCode::SERVICE_UNAVAILABLE, "listing host down").into_response()
    } else {
        Html(LISTING_PAGE).into_response()
    }
}

async fn spawn_stub(fail_page: Option<&'static str>) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        requests: requests.clone(),
        fail_page,
    };
    let app = Router::new()
        .route("/search", get(listing))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (addr, requests)
}

fn stub_config(addr: SocketAddr, pages: u32) -> ScrapeConfig {
    ScrapeConfig {
        base_url: format!("http://{addr}/search?q=mobiles"),
        pages,
        ..ScrapeConfig::default()
    }
}

#[tokio::test]
async fn issues_exactly_one_fetch_per_configured_page() {
    let (addr, requests) = spawn_stub(None).await;
    let scraper = Scraper::new(stub_config(addr, 3)).unwrap();
    let report = scraper.run().await.unwrap();

    let requests = requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![
            "/search?q=mobiles".to_string(),
            "/search?q=mobiles&page=2".to_string(),
            "/search?q=mobiles&page=3".to_string(),
        ]
    );
    assert_eq!(report.records.len(), 6);
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn single_page_run_fetches_only_the_base_url() {
    let (addr, requests) = spawn_stub(None).await;
    let scraper = Scraper::new(stub_config(addr, 1)).unwrap();
    let report = scraper.run().await.unwrap();

    assert_eq!(
        requests.lock().unwrap().clone(),
        vec!["/search?q=mobiles".to_string()]
    );
    assert_eq!(report.records.len(), 2);
    assert_eq!(
        report.records[0].phone_name.as_deref(),
        Some("Alpha 5G (Titanium Blue, 128 GB)")
    );
    assert_eq!(report.records[0].stars.as_deref(), Some("4.3"));
}

#[tokio::test]
async fn failed_page_is_skipped_and_later_pages_still_run() {
    let (addr, requests) = spawn_stub(Some("2")).await;
    let scraper = Scraper::new(stub_config(addr, 3)).unwrap();
    let report = scraper.run().await.unwrap();

    // all three pages were attempted
    assert_eq!(requests.lock().unwrap().len(), 3);
    // page 2 contributed zero records
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].page, 2);
    assert!(report.failures[0].url.ends_with("page=2"));
    assert!(report.failures[0].reason.contains("503"));
}
