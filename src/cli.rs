use clap::Parser;

/// Scrape book listings from books.toscrape.com into CSV and XLSX files.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of catalogue pages to scrape, starting from page 1.
    #[arg(long, default_value_t = 3)]
    pub max_pages: u32,

    /// Delay between page fetches (politeness).
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Base URL of the catalogue site (must be http/https).
    #[arg(long, default_value = "https://books.toscrape.com/")]
    pub base_url: String,

    /// Output directory for the exported files, created if absent.
    #[arg(long, default_value = "output")]
    pub out: String,
}
