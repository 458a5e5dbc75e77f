use scraper::{ElementRef, Html, Selector};

use crate::ProductRecord;

/// Extracts every product row from a parsed listing page.
///
/// Name, price and spec-list containers are walked in positional
/// correspondence, so extraction stops at the shortest of the three
/// collections. The star rating and the ratings/reviews summary are
/// page singletons and repeat on every row; when either marker is
/// missing the matching fields are absent on the whole page.
pub fn extract_listing(document: &Html) -> Vec<ProductRecord> {
    let name_selector = &Selector::parse("div.KzDlHZ").unwrap();
    let price_selector = &Selector::parse("div.Nx9bqj._4b5DiR").unwrap();
    let spec_list_selector = &Selector::parse("ul.G4BRas").unwrap();
    let spec_item_selector = &Selector::parse("li.J\\+igdf").unwrap();
    let stars_selector = &Selector::parse("div.XQDdHH").unwrap();
    let summary_selector = &Selector::parse("span.Wphh3N").unwrap();

    let stars = document.select(stars_selector).next().map(element_text);
    let (ratings_count, reviews_count) = document
        .select(summary_selector)
        .next()
        .map(|summary| split_ratings_reviews(&element_text(summary)))
        .unwrap_or((None, None));

    let names = document.select(name_selector);
    let prices = document.select(price_selector);
    let spec_lists = document.select(spec_list_selector);

    names
        .zip(prices)
        .zip(spec_lists)
        .map(|((name, price), spec_list)| {
            let specs = spec_list
                .select(spec_item_selector)
                .map(element_text)
                .collect::<Vec<_>>();
            // index 2 is the camera line, not part of the record
            ProductRecord {
                phone_name: Some(element_text(name)),
                price: Some(element_text(price)),
                ram_rom: specs.first().cloned(),
                display: specs.get(1).cloned(),
                battery: specs.get(3).cloned(),
                processor: specs.get(4).cloned(),
                stars: stars.clone(),
                ratings_count: ratings_count.clone(),
                reviews_count: reviews_count.clone(),
            }
        })
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Splits a `"123,456 Ratings & 12,345 Reviews"` summary into the two
/// counts. Both come back absent when the separator is missing.
fn split_ratings_reviews(text: &str) -> (Option<String>, Option<String>) {
    match text.split_once('&') {
        Some((ratings, reviews)) => (first_token(ratings), first_token(reviews)),
        None => (None, None),
    }
}

fn first_token(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_string)
}
