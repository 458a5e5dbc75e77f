use std::io::Write;

use csv::WriterBuilder;
use eyre::Result;

use crate::ProductRecord;

/// Column order of the tabular export.
pub const COLUMNS: [&str; 9] = [
    "PhoneName",
    "Price",
    "RAM_ROM",
    "Display",
    "Battery",
    "Processor",
    "Stars",
    "Ratings Count",
    "Reviews Count",
];

/// Dumps the records as a flat CSV table, header row first.
///
/// Absent values become empty cells.
pub fn write_csv<W: Write>(writer: W, records: &[ProductRecord]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.fields().map(|field| field.unwrap_or_default()))?;
    }
    csv_writer.flush()?;
    Ok(())
}
