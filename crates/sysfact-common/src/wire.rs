//! CSV encoding and decoding of [`SystemFactRecord`].
//!
//! A valid wire payload is exactly [`FACT_COUNT`] rows of exactly two
//! columns, `[label, value]`, in the order given by
//! [`crate::types::FACT_LABELS`]. Standard CSV quoting applies, so values
//! containing commas, quotes or newlines survive a round trip.

use crate::types::{SystemFactRecord, FACT_COUNT};

/// Errors produced by the wire codec.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload is not parseable as CSV at all.
    #[error("wire: CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The payload parsed, but does not carry exactly [`FACT_COUNT`] rows.
    #[error("wire: expected {FACT_COUNT} rows, found {found}")]
    RowCount { found: usize },

    /// A row does not carry exactly two columns (label and value).
    #[error("wire: row {row} has {found} columns, expected 2")]
    ColumnCount { row: usize, found: usize },

    /// An I/O failure while flushing encoded output.
    #[error("wire: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` alias for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;

/// Encodes a record as a CSV byte stream of `[label, value]` rows.
///
/// Unset fields encode as empty values. Any row-write failure aborts the
/// whole encode; no partial payload is ever produced.
pub fn encode_record(record: &SystemFactRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for (label, value) in record.fields() {
            writer.write_record([label, value.unwrap_or("")])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Decodes a CSV byte stream into a record.
///
/// Validation is structural only: exactly [`FACT_COUNT`] rows of exactly two
/// columns each. Labels are not checked; row *i*'s second column becomes
/// field *i* of the record.
pub fn decode_record(bytes: &[u8]) -> Result<SystemFactRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row?);
    }

    if rows.len() != FACT_COUNT {
        return Err(WireError::RowCount { found: rows.len() });
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != 2 {
            return Err(WireError::ColumnCount {
                row: i,
                found: row.len(),
            });
        }
    }

    let mut values = rows.into_iter().map(|row| row[1].to_string());
    Ok(SystemFactRecord {
        processor: values.next(),
        running_processes: values.next(),
        users: values.next(),
        os_name: values.next(),
        os_version: values.next(),
    })
}
