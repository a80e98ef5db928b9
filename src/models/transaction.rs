use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of ledger entry. Only transfers carry counterparty account
/// numbers, so the other kinds cannot hold stale `from`/`to` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer { from: String, to: String },
    Correction,
}

impl TransactionKind {
    /// Short name for display and CSV output
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer { .. } => "transfer",
            TransactionKind::Correction => "correction",
        }
    }
}

/// An append-only ledger record. Immutable once created: the collection
/// only grows, and records are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// The user whose balance this record belongs to
    pub user_id: Uuid,
    #[serde(flatten)]
    pub kind: TransactionKind,
    /// Signed from the owning user's point of view: positive = credit
    pub amount: Decimal,
    /// The owning user's balance immediately after this record applied
    pub balance_after: Decimal,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Display classification: credits are shown with `+` and success
    /// styling. Derived from kind and sign, never stored.
    pub fn is_credit(&self) -> bool {
        match self.kind {
            TransactionKind::Deposit => true,
            TransactionKind::Correction => self.amount >= Decimal::ZERO,
            _ => false,
        }
    }
}

// Flat row for CSV statements; csv can't serialize the nested kind enum
#[derive(Serialize)]
pub(crate) struct StatementRow<'a> {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: Decimal,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub balance_after: Decimal,
    pub description: &'a str,
    pub timestamp: DateTime<Utc>,
}

impl<'a> From<&'a Transaction> for StatementRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        let (from, to) = match &tx.kind {
            TransactionKind::Transfer { from, to } => (Some(from.as_str()), Some(to.as_str())),
            _ => (None, None),
        };
        Self {
            id: tx.id,
            kind: tx.kind.label(),
            amount: tx.amount,
            from,
            to,
            balance_after: tx.balance_after,
            description: &tx.description,
            timestamp: tx.timestamp,
        }
    }
}
