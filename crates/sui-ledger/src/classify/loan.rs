//! Loan and debt references embedded in remarks.
//!
//! Sui Shou Ji books loans against two placeholder accounts and records the
//! real counterparty only in the remark, in one of two shapes:
//!
//! ```text
//! #借入: 张三# 买书      tag form
//! [还债]李四 还款        bracket form
//! ```
//!
//! [`parse_loan_reference`] extracts the counterparty and the remaining remark;
//! [`resolve_placeholders`] rewrites a transaction that touches a placeholder.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::transaction::Transaction;

/// Placeholder account for money others owe us.
pub const RECEIVABLE_ACCOUNT: &str = "应收款项";
/// Placeholder account for money we owe others.
pub const PAYABLE_ACCOUNT: &str = "应付款项";

static TAG_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(借入|借出|还债|收债|免债|坏账): (.*)# ?(.*)").expect("invalid tag form regex")
});

static BRACKET_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(借入|借出|还债|收债|免债|坏账)\](\S*)\s?(.*)")
        .expect("invalid bracket form regex")
});

/// Kind of loan event named in the remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanKind {
    /// 借入
    BorrowIn,
    /// 借出
    LendOut,
    /// 还债
    RepayDebt,
    /// 收债
    CollectDebt,
    /// 免债
    ForgiveDebt,
    /// 坏账
    BadDebt,
}

impl LoanKind {
    /// Returns the marker as written in remarks.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BorrowIn => "借入",
            Self::LendOut => "借出",
            Self::RepayDebt => "还债",
            Self::CollectDebt => "收债",
            Self::ForgiveDebt => "免债",
            Self::BadDebt => "坏账",
        }
    }

    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "借入" => Some(Self::BorrowIn),
            "借出" => Some(Self::LendOut),
            "还债" => Some(Self::RepayDebt),
            "收债" => Some(Self::CollectDebt),
            "免债" => Some(Self::ForgiveDebt),
            "坏账" => Some(Self::BadDebt),
            _ => None,
        }
    }
}

/// Counterparty reference extracted from a remark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReference {
    /// Loan event kind.
    pub kind: LoanKind,
    /// Counterparty account name. Never empty.
    pub account: String,
    /// The remark with the marker and account removed. May be empty.
    pub remark: String,
}

/// Parses a loan reference out of `description`.
///
/// The tag form is tried first, the bracket form second. Only a match at the
/// start of the text counts. A match with an empty account is treated as no
/// match.
///
/// # Example
///
/// ```
/// use sui_ledger::classify::loan::{parse_loan_reference, LoanKind};
///
/// let loan = parse_loan_reference("#借入: 张三# 买书").unwrap();
/// assert_eq!(loan.kind, LoanKind::BorrowIn);
/// assert_eq!(loan.account, "张三");
/// assert_eq!(loan.remark, "买书");
///
/// assert!(parse_loan_reference("普通备注").is_none());
/// ```
#[must_use]
pub fn parse_loan_reference(description: &str) -> Option<LoanReference> {
    [&*TAG_FORM, &*BRACKET_FORM].into_iter().find_map(|pattern| {
        let caps = pattern.captures(description)?;
        let kind = LoanKind::from_marker(&caps[1])?;
        let account = &caps[2];
        if account.is_empty() {
            return None;
        }
        Some(LoanReference { kind, account: account.to_string(), remark: caps[3].to_string() })
    })
}

/// Returns `true` if `account` is exactly one of the debt placeholder names.
#[must_use]
pub fn is_debt_placeholder(account: &str) -> bool {
    account == RECEIVABLE_ACCOUNT || account == PAYABLE_ACCOUNT
}

/// Replaces debt placeholders in `tx` with the counterparty named in its description.
///
/// Does nothing unless `from` or `to` is a placeholder and the description
/// carries a loan reference. Both sides are replaced when both are
/// placeholders. Returns `true` if the transaction was rewritten.
pub fn resolve_placeholders(tx: &mut Transaction) -> bool {
    let from_placeholder = is_debt_placeholder(&tx.from);
    let to_placeholder = is_debt_placeholder(&tx.to);
    if !from_placeholder && !to_placeholder {
        return false;
    }

    let Some(loan) = parse_loan_reference(&tx.description) else {
        return false;
    };

    debug!(kind = loan.kind.as_str(), account = %loan.account, "resolved loan counterparty");
    if from_placeholder {
        tx.from.clone_from(&loan.account);
    }
    if to_placeholder {
        tx.to.clone_from(&loan.account);
    }
    tx.description = loan.remark;
    true
}
