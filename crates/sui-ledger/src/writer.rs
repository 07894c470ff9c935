//! Streaming writer for the five-field ledger.
//!
//! Provides [`TransactionWriter`] for writing [`Transaction`]s to any type
//! implementing [`Write`].

use std::io::Write;

use crate::{error::Result, transaction::Transaction};

/// Streaming CSV writer for ledger rows.
///
/// Writes one header-less row per transaction with columns
/// `time, from, to, value, description`. Output is buffered; call
/// [`flush`][Self::flush] when done.
///
/// # Example
///
/// ```ignore
/// use sui_ledger::writer::TransactionWriter;
/// use std::fs::File;
///
/// let file = File::create("dst.csv")?;
/// let mut writer = TransactionWriter::new(file);
///
/// writer.write(&tx1)?;
/// writer.write(&tx2)?;
/// writer.flush()?;
/// ```
pub struct TransactionWriter<W: Write> {
    inner: csv::Writer<W>,
    /// Number of transactions written.
    records_written: usize,
}

impl<W: Write> TransactionWriter<W> {
    /// Creates a new writer.
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        Self { inner, records_written: 0 }
    }

    /// Writes one transaction.
    pub fn write(&mut self, tx: &Transaction) -> Result<()> {
        self.inner.serialize(tx)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flushes buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Returns the number of transactions written.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transaction() -> Transaction {
        Transaction {
            time: "2024-01-03 09:00".to_string(),
            from: "招商银行".to_string(),
            to: "支付宝".to_string(),
            value: "100.00".to_string(),
            description: "充值".to_string(),
        }
    }

    #[test]
    fn test_write_row_without_header() {
        let mut output = Vec::new();
        {
            let mut writer = TransactionWriter::new(&mut output);
            writer.write(&sample_transaction()).unwrap();
            writer.flush().unwrap();
        }

        let result = String::from_utf8(output).unwrap();
        assert_eq!(result, "2024-01-03 09:00,招商银行,支付宝,100.00,充值\n");
    }

    #[test]
    fn test_fields_needing_quotes() {
        let mut tx = sample_transaction();
        tx.description = "午饭, \"加蛋\"".to_string();

        let mut output = Vec::new();
        {
            let mut writer = TransactionWriter::new(&mut output);
            writer.write(&tx).unwrap();
            writer.flush().unwrap();
        }

        let result = String::from_utf8(output).unwrap();
        assert!(result.ends_with(",\"午饭, \"\"加蛋\"\"\"\n"));
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let mut output = Vec::new();
        {
            let mut writer = TransactionWriter::new(&mut output);
            let tx = Transaction { time: "t".to_string(), ..Transaction::default() };
            writer.write(&tx).unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(String::from_utf8(output).unwrap(), "t,,,,\n");
    }

    #[test]
    fn test_records_written_counter() {
        let mut output = Vec::new();
        let mut writer = TransactionWriter::new(&mut output);

        assert_eq!(writer.records_written(), 0);
        writer.write(&sample_transaction()).unwrap();
        assert_eq!(writer.records_written(), 1);
        writer.write(&sample_transaction()).unwrap();
        writer.write(&sample_transaction()).unwrap();
        assert_eq!(writer.records_written(), 3);
    }
}
