use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::round2;
use crate::models::{Transaction, TransactionKind};

/// Credits vs absolute debits for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyActivity {
    /// "%b %y" label, e.g. "Oct 23"
    pub month: String,
    pub credits: Decimal,
    pub debits: Decimal,
}

/// Record counts per transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindCounts {
    pub deposits: usize,
    pub withdrawals: usize,
    pub transfers: usize,
    pub corrections: usize,
}

/// Total incoming vs outgoing amounts, both positive
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashFlow {
    pub incoming: Decimal,
    pub outgoing: Decimal,
}

/// Per-month credit/debit sums, oldest month first. Positive amounts
/// (deposits and positive corrections) count as credits; everything
/// else counts as debits by absolute value. Expects the ledger's
/// newest-first ordering.
pub fn monthly_activity(transactions: &[Transaction]) -> Vec<MonthlyActivity> {
    let mut months: Vec<MonthlyActivity> = Vec::new();

    for tx in transactions.iter().rev() {
        let label = tx.timestamp.format("%b %y").to_string();
        if months.last().map(|m| m.month.as_str()) != Some(label.as_str()) {
            months.push(MonthlyActivity {
                month: label,
                credits: Decimal::ZERO,
                debits: Decimal::ZERO,
            });
        }
        let month = months.last_mut().expect("just pushed");
        if tx.amount >= Decimal::ZERO {
            month.credits += tx.amount;
        } else {
            month.debits += tx.amount.abs();
        }
    }
    months
}

/// How many records of each kind the slice contains
pub fn kind_counts(transactions: &[Transaction]) -> KindCounts {
    let mut counts = KindCounts::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Deposit => counts.deposits += 1,
            TransactionKind::Withdrawal => counts.withdrawals += 1,
            TransactionKind::Transfer { .. } => counts.transfers += 1,
            TransactionKind::Correction => counts.corrections += 1,
        }
    }
    counts
}

/// Total money in vs money out over the slice
pub fn cash_flow(transactions: &[Transaction]) -> CashFlow {
    let mut flow = CashFlow::default();
    for tx in transactions {
        if tx.amount >= Decimal::ZERO {
            flow.incoming += tx.amount;
        } else {
            flow.outgoing += tx.amount.abs();
        }
    }
    flow
}

/// (timestamp, balance_after) points oldest-first, for a balance-over-time
/// series. Expects the ledger's newest-first ordering.
pub fn balance_history(transactions: &[Transaction]) -> Vec<(DateTime<Utc>, Decimal)> {
    transactions
        .iter()
        .rev()
        .map(|tx| (tx.timestamp, tx.balance_after))
        .collect()
}

/// Format a monetary amount with a currency sign, thousands separators
/// and exactly 2 decimal places, e.g. `-$1,234.50`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round2(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part, format!("{frac:0<2}")),
        None => (text.as_str(), "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac_part}")
}
