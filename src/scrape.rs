use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::dom::DomNode as _;
use crate::extract;
use crate::fetch;
use crate::record::BookRecord;

/// Run configuration, passed explicitly to every component.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root, always with a trailing slash.
    pub base_url: String,
    pub max_pages: u32,
    pub delay: Duration,
}

impl ScrapeConfig {
    pub fn new(base_url: &str, max_pages: u32, delay: Duration) -> anyhow::Result<Self> {
        let parsed = Url::parse(base_url).with_context(|| format!("parse base url: {base_url}"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("base url must be http/https: {base_url}");
        }

        let mut base_url = base_url.to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            base_url,
            max_pages,
            delay,
        })
    }

    /// Page 1 is the site root; every later page lives under `catalogue/`.
    pub fn page_url(&self, page: u32) -> String {
        if page == 1 {
            self.base_url.clone()
        } else {
            format!("{}catalogue/page-{page}.html", self.base_url)
        }
    }
}

/// All book records on one parsed page, in document order.
pub fn books_on_page(document: &Html, base_url: &str) -> Vec<BookRecord> {
    document
        .root_element()
        .select_all("article.product_pod")
        .iter()
        .map(|fragment| extract::extract_book(fragment, base_url))
        .collect()
}

/// Fetch and scrape a single catalogue page.
pub fn scrape_page(client: &Client, cfg: &ScrapeConfig, page: u32) -> anyhow::Result<Vec<BookRecord>> {
    let url = cfg.page_url(page);
    tracing::info!(page, url = %url, "fetching page");

    let document = fetch::get(client, &url)?;
    Ok(books_on_page(&document, &cfg.base_url))
}

/// Scrape pages 1..=max_pages sequentially and return the sorted result.
///
/// A failed page is logged and contributes zero records; the run always
/// covers the whole configured range. The politeness delay runs between
/// consecutive fetches only, never after the last page.
pub fn scrape_all(client: &Client, cfg: &ScrapeConfig) -> Vec<BookRecord> {
    let mut records = Vec::new();

    for page in 1..=cfg.max_pages {
        match scrape_page(client, cfg, page) {
            Ok(mut found) => {
                tracing::info!(page, count = found.len(), "page scraped");
                records.append(&mut found);
            }
            Err(err) => {
                tracing::warn!(page, ?err, "page fetch failed; continuing without it");
            }
        }

        if page < cfg.max_pages {
            thread::sleep(cfg.delay);
        }
    }

    sort_records(&mut records);
    records
}

/// Stable sort by rating descending, then price ascending.
///
/// Stability keeps ties in page-fetch order, so repeated sorting of the
/// same sequence is idempotent.
pub fn sort_records(records: &mut [BookRecord]) {
    records.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then_with(|| a.price.total_cmp(&b.price))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Availability;

    fn cfg() -> ScrapeConfig {
        ScrapeConfig::new("https://books.toscrape.com/", 3, Duration::ZERO).unwrap()
    }

    fn record(title: &str, price: f64, rating: u8) -> BookRecord {
        BookRecord {
            title: title.to_owned(),
            price,
            rating,
            availability: Availability::InStock,
            url: String::new(),
        }
    }

    #[test]
    fn page_one_maps_to_the_site_root() {
        assert_eq!(cfg().page_url(1), "https://books.toscrape.com/");
    }

    #[test]
    fn later_pages_map_to_the_catalogue_template() {
        assert_eq!(
            cfg().page_url(2),
            "https://books.toscrape.com/catalogue/page-2.html"
        );
        assert_eq!(
            cfg().page_url(50),
            "https://books.toscrape.com/catalogue/page-50.html"
        );
    }

    #[test]
    fn missing_trailing_slash_is_added_to_the_base_url() {
        let cfg = ScrapeConfig::new("http://127.0.0.1:8080", 1, Duration::ZERO).unwrap();
        assert_eq!(cfg.page_url(1), "http://127.0.0.1:8080/");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        assert!(ScrapeConfig::new("ftp://example.com/", 1, Duration::ZERO).is_err());
    }

    #[test]
    fn sort_orders_by_rating_desc_then_price_asc() {
        let mut records = vec![
            record("A", 10.0, 5),
            record("B", 5.0, 5),
            record("C", 1.0, 2),
        ];
        sort_records(&mut records);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut records = vec![
            record("first", 7.5, 4),
            record("second", 7.5, 4),
            record("third", 7.5, 4),
        ];
        sort_records(&mut records);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn sorting_a_sorted_sequence_is_idempotent() {
        let mut records = vec![
            record("B", 5.0, 5),
            record("A", 10.0, 5),
            record("C", 1.0, 2),
        ];
        sort_records(&mut records);
        let once = records.clone();
        sort_records(&mut records);
        assert_eq!(records, once);
    }

    #[test]
    fn books_on_page_preserves_document_order() {
        let html = r#"<html><body>
            <article class="product_pod">
                <h3><a href="one_1/index.html" title="One"></a></h3>
                <p class="price_color">£10.00</p>
            </article>
            <article class="product_pod">
                <h3><a href="two_2/index.html" title="Two"></a></h3>
                <p class="price_color">£20.00</p>
            </article>
        </body></html>"#;

        let document = Html::parse_document(html);
        let records = books_on_page(&document, "https://books.toscrape.com/");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "One");
        assert_eq!(records[1].title, "Two");
    }

    #[test]
    fn page_without_listings_yields_no_records() {
        let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(books_on_page(&document, "https://books.toscrape.com/").is_empty());
    }
}
