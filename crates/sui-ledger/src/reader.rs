//! Streaming reader for the export.
//!
//! Provides [`RecordReader`], an iterator that reads [`RawRecord`]s from any
//! source implementing [`Read`].

use std::io::Read;

use csv::StringRecord;

use crate::{
    error::{ConvertError, Result},
    record::{FIELD_COUNT, RawRecord},
};

/// Number of header rows at the top of a Sui Shou Ji export.
pub const DEFAULT_HEADER_ROWS: usize = 2;

/// Streaming reader for export rows.
///
/// Skips the configured number of header rows, then yields one decoded
/// [`RawRecord`] per data row. Header rows are not checked for width; data
/// rows must have exactly [`FIELD_COUNT`] fields. Iteration stops after the
/// first error.
///
/// # Example
///
/// ```ignore
/// use sui_ledger::reader::RecordReader;
/// use std::fs::File;
///
/// let file = File::open("src.csv")?;
/// for record in RecordReader::new(file) {
///     let record = record?;
///     println!("{} {}", record.date, record.amount);
/// }
/// ```
pub struct RecordReader<R> {
    inner: csv::Reader<R>,
    row: StringRecord,
    header_rows: usize,
    /// Number of data rows decoded so far.
    records_read: usize,
    /// Set at EOF or after an error.
    finished: bool,
    header_skipped: bool,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader that skips [`DEFAULT_HEADER_ROWS`] header rows.
    pub fn new(reader: R) -> Self {
        Self::with_header_rows(reader, DEFAULT_HEADER_ROWS)
    }

    /// Creates a reader that skips `header_rows` rows before the data.
    pub fn with_header_rows(reader: R, header_rows: usize) -> Self {
        let inner = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
        Self {
            inner,
            row: StringRecord::new(),
            header_rows,
            records_read: 0,
            finished: false,
            header_skipped: false,
        }
    }

    /// Returns the number of data rows decoded so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn skip_header(&mut self) -> Result<()> {
        for _ in 0..self.header_rows {
            if !self.inner.read_record(&mut self.row)? {
                break;
            }
        }
        Ok(())
    }

    fn read_one(&mut self) -> Result<Option<RawRecord>> {
        if !self.inner.read_record(&mut self.row)? {
            return Ok(None);
        }

        if self.row.len() != FIELD_COUNT {
            return Err(ConvertError::FieldCount {
                line: self.row.position().map_or(0, csv::Position::line),
                expected: FIELD_COUNT,
                actual: self.row.len(),
            });
        }

        let record: RawRecord = self.row.deserialize(None)?;
        Ok(Some(record))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.header_skipped {
            self.header_skipped = true;
            if let Err(e) = self.skip_header() {
                self.finished = true;
                return Some(Err(e));
            }
        }

        match self.read_one() {
            Ok(Some(record)) => {
                self.records_read += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
