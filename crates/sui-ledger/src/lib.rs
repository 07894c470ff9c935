//! Conversion of Sui Shou Ji (随手记) exports into a five-field ledger.
//!
//! The export is a 12-column CSV where each transfer between own accounts is
//! split into a transfer-out and a transfer-in row linked by an association
//! id, and loans are booked against placeholder accounts with the real
//! counterparty written into the remark. This crate turns it into rows of
//!
//! ```text
//! time, from, to, value, description
//! ```
//!
//! - [`reader`] decodes export rows into [`RawRecord`][record::RawRecord]s
//! - [`classify`] reclassifies rows, pairs transfer halves and resolves loan
//!   counterparties
//! - [`writer`] writes [`Transaction`][transaction::Transaction]s
//! - [`convert`][convert::convert] wires the three together for one run
//!
//! # Quick start
//!
//! ```
//! use sui_ledger::prelude::*;
//!
//! let mut classifier = Classifier::default();
//! let out = RawRecord {
//!     tag: "转出".to_string(),
//!     date: "2024-01-03".to_string(),
//!     account: "招商银行".to_string(),
//!     amount: "100".to_string(),
//!     association_id: "1".to_string(),
//!     ..RawRecord::default()
//! };
//! let into = RawRecord { tag: "转入".to_string(), account: "支付宝".to_string(), ..out.clone() };
//!
//! assert!(classifier.classify(&out).is_none());
//! let tx = classifier.classify(&into).unwrap();
//! assert_eq!((tx.from.as_str(), tx.to.as_str()), ("招商银行", "支付宝"));
//! ```

pub mod classify;
pub mod convert;
pub mod error;
pub mod reader;
pub mod record;
pub mod transaction;
pub mod writer;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        classify::{
            Classifier, PairingMode, PendingTransfers,
            loan::{LoanKind, LoanReference, parse_loan_reference},
        },
        convert::{ConversionSummary, ConvertOptions, convert},
        error::{ConvertError, Result},
        reader::RecordReader,
        record::{RawRecord, RecordKind},
        transaction::Transaction,
        writer::TransactionWriter,
    };
}
