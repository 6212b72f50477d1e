use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;

use crate::cli::Cli;
use crate::export;
use crate::fetch;
use crate::report::SummaryStats;
use crate::scrape::{self, ScrapeConfig};

/// Full scrape run: fetch, aggregate, summarize, export.
///
/// An export failure aborts the run, but only after the summary has been
/// printed; partial console output with no files is the intended shape of
/// that failure.
pub fn run(args: Cli) -> anyhow::Result<()> {
    let cfg = ScrapeConfig::new(
        &args.base_url,
        args.max_pages,
        Duration::from_millis(args.delay_ms),
    )?;

    let rule = "=".repeat(50);
    println!("{rule}");
    println!("BOOKS TO SCRAPE - Web Scraping Demo");
    println!("{rule}");
    println!("Target: {}", cfg.base_url);
    println!("{rule}\n");

    let client = fetch::client()?;
    let records = scrape::scrape_all(&client, &cfg);

    if records.is_empty() {
        println!("No data scraped. Check the connection to {}.", cfg.base_url);
        return Ok(());
    }

    let stats = SummaryStats::from_records(&records);
    print!("{stats}");

    let out_dir = PathBuf::from(&args.out);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir: {}", out_dir.display()))?;

    let csv_path = out_dir.join("books_data.csv");
    export::write_csv(&records, &csv_path).context("export csv")?;
    println!("\nData saved to {}", csv_path.display());

    let xlsx_path = out_dir.join("books_data.xlsx");
    export::write_xlsx(&records, &xlsx_path).context("export xlsx")?;
    println!("Data saved to {}", xlsx_path.display());

    println!("\nScraping completed. Output files are in: {}", out_dir.display());

    Ok(())
}
