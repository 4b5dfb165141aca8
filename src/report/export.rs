//! CSV export of outcome tables

use std::error::Error;

use super::table::OutcomeTable;

/// File name offered for download by every front end.
pub const CSV_FILE_NAME: &str = "mortgage_outcomes.csv";

/// Encode a table as UTF-8 CSV bytes.
///
/// The header row is `Year` followed by one column label per price. Values
/// are plain decimal text with exactly the table's rounding precision and
/// no thousands separators; labels containing commas come out quoted. Every
/// record, the last included, is newline-terminated. An empty table encodes
/// to the header row alone.
pub fn to_csv(table: &OutcomeTable) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        let mut header: Vec<String> = Vec::with_capacity(table.columns.len() + 1);
        header.push("Year".to_string());
        header.extend(table.columns.iter().map(|c| c.label.clone()));
        writer.write_record(&header)?;

        let precision = table.rounding_digits as usize;
        for row in &table.rows {
            let mut record: Vec<String> = Vec::with_capacity(row.values.len() + 1);
            record.push(row.year.to_string());
            record.extend(row.values.iter().map(|v| format!("{:.*}", precision, v)));
            writer.write_record(&record)?;
        }

        writer.flush()?;
    }
    Ok(buffer)
}
