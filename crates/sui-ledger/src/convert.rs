//! One conversion pass: export rows in, ledger rows out.

use std::io::{Read, Write};

use tracing::{debug, info, warn};

use crate::{
    classify::{Classifier, PairingMode},
    error::Result,
    reader::{DEFAULT_HEADER_ROWS, RecordReader},
    record::RecordKind,
    writer::TransactionWriter,
};

/// Knobs of a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Header rows to skip before the first data row.
    pub header_rows: usize,
    /// How transfer halves are paired.
    pub pairing: PairingMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { header_rows: DEFAULT_HEADER_ROWS, pairing: PairingMode::default() }
    }
}

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read from the input.
    pub records_read: usize,
    /// Ledger rows written to the output.
    pub transactions_written: usize,
    /// Rows of an unrecognized kind.
    pub skipped: usize,
    /// Transfer halves that never met their counterpart.
    pub unmatched_transfers: usize,
}

/// Converts an export read from `input` into ledger rows written to `output`.
///
/// Runs to the end of the input or stops at the first read, format or write
/// error. Rows written before an error stay written. Unmatched transfer
/// halves are dropped and only counted.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    options: ConvertOptions,
) -> Result<ConversionSummary> {
    let mut reader = RecordReader::with_header_rows(input, options.header_rows);
    let mut writer = TransactionWriter::new(output);
    let mut classifier = Classifier::new(options.pairing);
    let mut skipped = 0;

    for record in reader.by_ref() {
        let record = record?;
        let is_known = !matches!(record.kind(), RecordKind::Other(_));
        match classifier.classify(&record) {
            Some(tx) => writer.write(&tx)?,
            None if !is_known => skipped += 1,
            None => {}
        }
    }
    writer.flush()?;

    let pending = classifier.into_pending();
    if !pending.is_empty() {
        warn!(count = pending.len(), "dropping unmatched transfer halves");
        for id in pending.association_ids() {
            debug!(association_id = id, "unmatched transfer half");
        }
    }

    let summary = ConversionSummary {
        records_read: reader.records_read(),
        transactions_written: writer.records_written(),
        skipped,
        unmatched_transfers: pending.len(),
    };
    info!(
        read = summary.records_read,
        written = summary.transactions_written,
        skipped = summary.skipped,
        unmatched = summary.unmatched_transfers,
        "conversion finished"
    );
    Ok(summary)
}
