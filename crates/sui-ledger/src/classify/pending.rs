//! Transfer halves waiting for their counterpart.

use std::collections::{HashMap, hash_map::Entry};

use crate::transaction::Transaction;

/// How to decide whether a parked half supplies the missing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PairingMode {
    /// A side counts only when it is present and non-empty.
    ///
    /// A parked half whose account text is empty is indistinguishable from no
    /// half at all and gets replaced by the next arrival.
    #[default]
    Lenient,
    /// A side counts as soon as the opposite half has arrived, even with an
    /// empty account.
    Strict,
}

/// A transfer half seen without its counterpart yet.
///
/// Exactly one of `from` and `to` is set, depending on which half arrived.
/// The completed transaction takes its time, value and description from the
/// second half, so only the account is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransfer {
    /// Source account, set when the transfer-out half arrived first.
    pub from: Option<String>,
    /// Destination account, set when the transfer-in half arrived first.
    pub to: Option<String>,
}

/// Side of a transfer an arriving half provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Transfer-out: provides `from`, needs `to`.
    From,
    /// Transfer-in: provides `to`, needs `from`.
    To,
}

/// Parked transfer halves keyed by association id.
#[derive(Debug, Default)]
pub struct PendingTransfers {
    entries: HashMap<String, PendingTransfer>,
}

impl PendingTransfers {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of halves still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no half is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parked half for `association_id`, if any.
    #[must_use]
    pub fn get(&self, association_id: &str) -> Option<&PendingTransfer> {
        self.entries.get(association_id)
    }

    /// Association ids of the halves still waiting, in no particular order.
    pub fn association_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Offers one half of a transfer.
    ///
    /// `account` is the side this half provides. If the parked entry for
    /// `association_id` supplies the opposite side under `mode`, the entry is
    /// removed and the complete transaction is returned; `time`, `value` and
    /// `description` come from the arriving half. Otherwise the arriving half
    /// replaces whatever was parked and `None` is returned.
    pub(crate) fn offer(
        &mut self,
        association_id: &str,
        side: Side,
        account: String,
        mut tx: Transaction,
        mode: PairingMode,
    ) -> Option<Transaction> {
        let parked = match self.entries.entry(association_id.to_string()) {
            Entry::Occupied(entry) if supplies(entry.get(), side, mode) => entry.remove(),
            Entry::Occupied(mut entry) => {
                entry.insert(PendingTransfer::half(side, account));
                return None;
            }
            Entry::Vacant(entry) => {
                entry.insert(PendingTransfer::half(side, account));
                return None;
            }
        };

        match side {
            Side::From => {
                tx.from = account;
                tx.to = parked.to.unwrap_or_default();
            }
            Side::To => {
                tx.from = parked.from.unwrap_or_default();
                tx.to = account;
            }
        }
        Some(tx)
    }
}

impl PendingTransfer {
    fn half(side: Side, account: String) -> Self {
        match side {
            Side::From => Self { from: Some(account), to: None },
            Side::To => Self { from: None, to: Some(account) },
        }
    }
}

/// Whether `parked` carries the side the arriving half is missing.
fn supplies(parked: &PendingTransfer, arriving: Side, mode: PairingMode) -> bool {
    let needed = match arriving {
        Side::From => parked.to.as_deref(),
        Side::To => parked.from.as_deref(),
    };
    match mode {
        PairingMode::Lenient => needed.is_some_and(|account| !account.is_empty()),
        PairingMode::Strict => needed.is_some(),
    }
}
