use std::fmt;

use crate::record::BookRecord;

/// Aggregate statistics over a scraped record set.
///
/// Pure summary; an empty input produces zeroed stats and a "no data"
/// report rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub mean_rating: f64,
    /// Count of records per rating value, indexed 0..=5.
    pub rating_histogram: [usize; 6],
    /// First five records in the current sort order.
    pub top: Vec<BookRecord>,
}

impl SummaryStats {
    pub fn from_records(records: &[BookRecord]) -> Self {
        if records.is_empty() {
            return Self {
                count: 0,
                mean_price: 0.0,
                min_price: 0.0,
                max_price: 0.0,
                mean_rating: 0.0,
                rating_histogram: [0; 6],
                top: Vec::new(),
            };
        }

        let count = records.len();
        let price_sum: f64 = records.iter().map(|r| r.price).sum();
        let min_price = records.iter().map(|r| r.price).fold(f64::INFINITY, f64::min);
        let max_price = records
            .iter()
            .map(|r| r.price)
            .fold(f64::NEG_INFINITY, f64::max);
        let rating_sum: u32 = records.iter().map(|r| u32::from(r.rating)).sum();

        let mut rating_histogram = [0usize; 6];
        for record in records {
            rating_histogram[usize::from(record.rating.min(5))] += 1;
        }

        Self {
            count,
            mean_price: price_sum / count as f64,
            min_price,
            max_price,
            mean_rating: f64::from(rating_sum) / count as f64,
            rating_histogram,
            top: records.iter().take(5).cloned().collect(),
        }
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "SCRAPING SUMMARY")?;
        writeln!(f, "{rule}")?;

        if self.count == 0 {
            writeln!(f, "No books scraped.")?;
            return Ok(());
        }

        writeln!(f, "Total books scraped: {}", self.count)?;
        writeln!(f, "Average price: £{:.2}", self.mean_price)?;
        writeln!(
            f,
            "Price range: £{:.2} - £{:.2}",
            self.min_price, self.max_price
        )?;
        writeln!(f, "Average rating: {:.2} stars", self.mean_rating)?;

        writeln!(f, "\nRating distribution:")?;
        for rating in (0..=5).rev() {
            let count = self.rating_histogram[rating];
            if count > 0 {
                writeln!(f, "  {rating} stars: {count}")?;
            }
        }

        writeln!(f, "\nTop 5 highest-rated affordable books:")?;
        for record in &self.top {
            writeln!(
                f,
                "  {} | £{:.2} | {} stars",
                record.title, record.price, record.rating
            )?;
        }

        Ok(())
    }
}
