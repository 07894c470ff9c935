//! Row model of the Sui Shou Ji (随手记) export.
//!
//! Every data row of the export carries exactly [`FIELD_COUNT`] columns. The
//! [`RecordReader`][crate::reader::RecordReader] decodes each row once into a
//! [`RawRecord`] so that the rest of the crate works with named fields only.

use serde::Deserialize;

/// Number of columns in an export row.
pub const FIELD_COUNT: usize = 12;

/// Type tag of an income row.
pub const TAG_INCOME: &str = "收入";
/// Type tag of an expense row.
pub const TAG_EXPENSE: &str = "支出";
/// Type tag of the receiving half of a transfer.
pub const TAG_TRANSFER_IN: &str = "转入";
/// Type tag of the sending half of a transfer.
pub const TAG_TRANSFER_OUT: &str = "转出";

/// Kind of an export row, decoded from its type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Money earned: flows from `category:subcategory` into the account.
    Income,
    /// Money spent: flows from the account into `category:subcategory`.
    Expense,
    /// Receiving half of a transfer between own accounts.
    TransferIn,
    /// Sending half of a transfer between own accounts.
    TransferOut,
    /// Any other tag (balance adjustments, refunds, ...). Not converted.
    Other(String),
}

impl From<&str> for RecordKind {
    fn from(tag: &str) -> Self {
        match tag {
            TAG_INCOME => Self::Income,
            TAG_EXPENSE => Self::Expense,
            TAG_TRANSFER_IN => Self::TransferIn,
            TAG_TRANSFER_OUT => Self::TransferOut,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One data row of the export.
///
/// Fields are declared in column order; the CSV layer deserializes them
/// positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// 交易类型: the raw type tag. See [`RawRecord::kind`].
    pub tag: String,
    /// 日期
    pub date: String,
    /// 类别
    pub category: String,
    /// 子类别
    pub subcategory: String,
    /// 项目
    pub project: String,
    /// 账户
    pub account: String,
    /// 币种
    pub currency: String,
    /// 金额, kept verbatim.
    pub amount: String,
    /// 成员
    pub member: String,
    /// 商家
    pub payee: String,
    /// 备注
    pub remark: String,
    /// 关联 ID, shared by both halves of a transfer.
    pub association_id: String,
}

impl RawRecord {
    /// Decoded type tag.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        RecordKind::from(self.tag.as_str())
    }

    /// Pseudo-account name `category:subcategory` used for income and expense rows.
    #[must_use]
    pub fn category_account(&self) -> String {
        format!("{}:{}", self.category, self.subcategory)
    }
}
