//! Reclassification of export rows into ledger transactions.
//!
//! [`Classifier`] consumes one [`RawRecord`] at a time and yields zero or one
//! [`Transaction`]:
//!
//! | kind         | from                   | to                     |
//! |--------------|------------------------|------------------------|
//! | income       | `category:subcategory` | account                |
//! | expense      | account                | `category:subcategory` |
//! | transfer-in  | *counterpart*          | account                |
//! | transfer-out | account                | *counterpart*          |
//!
//! Transfers arrive as two separate rows sharing an association id. The
//! first half is parked in [`PendingTransfers`]; the second half completes it.
//! Rows of any other kind are skipped.
//!
//! Every emitted transaction then goes through
//! [`loan::resolve_placeholders`].

pub mod loan;
mod pending;

use tracing::{debug, trace};

pub use pending::{PairingMode, PendingTransfer, PendingTransfers};

use self::pending::Side;
use crate::{
    record::{RawRecord, RecordKind},
    transaction::Transaction,
};

/// Stateful row classifier for one conversion run.
#[derive(Debug, Default)]
pub struct Classifier {
    pending: PendingTransfers,
    mode: PairingMode,
}

impl Classifier {
    /// Creates a classifier with empty transfer state.
    #[must_use]
    pub fn new(mode: PairingMode) -> Self {
        Self { pending: PendingTransfers::new(), mode }
    }

    /// Transfer halves still waiting for their counterpart.
    #[must_use]
    pub fn pending(&self) -> &PendingTransfers {
        &self.pending
    }

    /// Consumes the classifier, returning the halves that never found a counterpart.
    #[must_use]
    pub fn into_pending(self) -> PendingTransfers {
        self.pending
    }

    /// Classifies one row.
    ///
    /// Returns `None` for the first half of a transfer and for rows of an
    /// unknown kind.
    pub fn classify(&mut self, record: &RawRecord) -> Option<Transaction> {
        classify(record, &mut self.pending, self.mode)
    }
}

/// Classifies one row against explicit transfer state.
///
/// Same as [`Classifier::classify`]; useful when the caller owns the state.
pub fn classify(
    record: &RawRecord,
    pending: &mut PendingTransfers,
    mode: PairingMode,
) -> Option<Transaction> {
    let mut tx = Transaction {
        time: record.date.clone(),
        value: record.amount.clone(),
        description: record.remark.clone(),
        ..Transaction::default()
    };

    match record.kind() {
        RecordKind::Income => {
            tx.from = record.category_account();
            tx.to = record.account.clone();
        }
        RecordKind::Expense => {
            tx.from = record.account.clone();
            tx.to = record.category_account();
        }
        RecordKind::TransferIn => {
            tx = transfer_half(record, Side::To, tx, pending, mode)?;
        }
        RecordKind::TransferOut => {
            tx = transfer_half(record, Side::From, tx, pending, mode)?;
        }
        RecordKind::Other(tag) => {
            debug!(%tag, date = %record.date, "skipping record of unknown kind");
            return None;
        }
    }

    loan::resolve_placeholders(&mut tx);
    Some(tx)
}

fn transfer_half(
    record: &RawRecord,
    side: Side,
    tx: Transaction,
    pending: &mut PendingTransfers,
    mode: PairingMode,
) -> Option<Transaction> {
    let id = record.association_id.as_str();
    let matched = pending.offer(id, side, record.account.clone(), tx, mode);
    match &matched {
        Some(_) => trace!(association_id = id, "transfer matched"),
        None => trace!(association_id = id, ?side, "transfer half parked"),
    }
    matched
}
