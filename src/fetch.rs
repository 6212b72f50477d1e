use std::time::Duration;

use anyhow::Context as _;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, USER_AGENT};
use scraper::Html;

/// Browser-like header set; some sites serve bots a degraded page otherwise.
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the blocking HTTP client shared by all page fetches.
pub fn client() -> anyhow::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("build http client")
}

/// Fetch one page and parse the body into a DOM document.
///
/// Any transport problem (connect failure, timeout, non-2xx status) comes
/// back as an error; the caller decides whether that aborts anything.
pub fn get(client: &Client, url: &str) -> anyhow::Result<Html> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("bad status for {url}"))?;
    let body = response
        .text()
        .with_context(|| format!("read body of {url}"))?;

    Ok(Html::parse_document(&body))
}
