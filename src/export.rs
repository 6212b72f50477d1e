use std::path::Path;

use anyhow::Context as _;
use rust_xlsxwriter::Workbook;

use crate::record::BookRecord;

/// Write all records as CSV with columns Title, Price, Rating,
/// Availability, URL. The header row comes from the record's serde field
/// names.
pub fn write_csv(records: &[BookRecord], path: &Path) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create csv: {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write csv row: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;

    Ok(())
}

/// Write the spreadsheet variant: Title, Price and Rating only.
pub fn write_xlsx(records: &[BookRecord], path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Books").context("name worksheet")?;

    for (col, header) in ["Title", "Price", "Rating"].into_iter().enumerate() {
        sheet
            .write_string(0, col as u16, header)
            .context("write xlsx header")?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet
            .write_string(row, 0, &record.title)
            .context("write xlsx title")?;
        sheet
            .write_number(row, 1, record.price)
            .context("write xlsx price")?;
        sheet
            .write_number(row, 2, f64::from(record.rating))
            .context("write xlsx rating")?;
    }

    workbook
        .save(path)
        .with_context(|| format!("write xlsx: {}", path.display()))?;

    Ok(())
}
