use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::models::{AccountStatus, Transaction, TransactionKind, User};

/// Result of a single-user ledger operation: the updated user value and
/// the matching ledger record. The caller owns the commit.
#[derive(Debug, Clone)]
pub struct LedgerUpdate {
    pub user: User,
    pub record: Transaction,
}

/// Result of a transfer: both updated users and both ledger records.
/// Commit all four as a single unit or not at all.
#[derive(Debug, Clone)]
pub struct TransferUpdate {
    pub sender: User,
    pub recipient: User,
    pub sender_record: Transaction,
    pub recipient_record: Transaction,
}

/// Round to exactly 2 decimal places immediately after every monetary
/// arithmetic step, before the value is stored as a balance or
/// `balance_after`. Keeps drift from accumulating over a long history.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn ensure_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}

fn ensure_covered(user: &User, amount: Decimal) -> Result<()> {
    if amount > user.balance {
        return Err(LedgerError::InsufficientFunds {
            balance: user.balance,
            requested: amount,
        });
    }
    Ok(())
}

fn new_record(
    user: &User,
    kind: TransactionKind,
    amount: Decimal,
    balance_after: Decimal,
    description: String,
    timestamp: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        user_id: user.id,
        kind,
        amount,
        balance_after,
        description,
        timestamp,
    }
}

/// Credit `amount` to the user. Frozen accounts may still receive
/// deposits; freezing only blocks withdrawals and transfers.
pub fn apply_deposit(
    user: &User,
    amount: Decimal,
    description: Option<&str>,
    timestamp: DateTime<Utc>,
) -> Result<LedgerUpdate> {
    ensure_positive(amount)?;

    let mut updated = user.clone();
    updated.balance = round2(user.balance + amount);

    let record = new_record(
        user,
        TransactionKind::Deposit,
        amount,
        updated.balance,
        description.unwrap_or("Cash Deposit").to_string(),
        timestamp,
    );
    Ok(LedgerUpdate { user: updated, record })
}

/// Debit `amount` from the user.
pub fn apply_withdrawal(
    user: &User,
    amount: Decimal,
    description: Option<&str>,
    timestamp: DateTime<Utc>,
) -> Result<LedgerUpdate> {
    ensure_positive(amount)?;
    if user.is_frozen() {
        return Err(LedgerError::AccountFrozen);
    }
    ensure_covered(user, amount)?;

    let mut updated = user.clone();
    updated.balance = round2(user.balance - amount);

    let record = new_record(
        user,
        TransactionKind::Withdrawal,
        -amount,
        updated.balance,
        description.unwrap_or("Cash Withdrawal").to_string(),
        timestamp,
    );
    Ok(LedgerUpdate { user: updated, record })
}

/// Move `amount` from sender to recipient. Emits two records sharing the
/// same `from`/`to` pair, oppositely signed, each `balance_after`
/// reflecting only its own party. The caller must commit both balance
/// changes and both records atomically: no intermediate state may be
/// observable between them.
pub fn apply_transfer(
    sender: &User,
    recipient: &User,
    amount: Decimal,
    description: Option<&str>,
    timestamp: DateTime<Utc>,
) -> Result<TransferUpdate> {
    ensure_positive(amount)?;
    if sender.is_frozen() {
        return Err(LedgerError::AccountFrozen);
    }
    if sender.id == recipient.id {
        return Err(LedgerError::InvalidRecipient(
            recipient.account_number.clone(),
        ));
    }
    ensure_covered(sender, amount)?;

    let mut updated_sender = sender.clone();
    updated_sender.balance = round2(sender.balance - amount);
    let mut updated_recipient = recipient.clone();
    updated_recipient.balance = round2(recipient.balance + amount);

    let kind = TransactionKind::Transfer {
        from: sender.account_number.clone(),
        to: recipient.account_number.clone(),
    };

    let sender_record = new_record(
        sender,
        kind.clone(),
        -amount,
        updated_sender.balance,
        description
            .map(str::to_string)
            .unwrap_or_else(|| format!("Transfer to {}", recipient.name)),
        timestamp,
    );
    let recipient_record = new_record(
        recipient,
        kind,
        amount,
        updated_recipient.balance,
        description
            .map(str::to_string)
            .unwrap_or_else(|| format!("Transfer from {}", sender.name)),
        timestamp,
    );

    Ok(TransferUpdate {
        sender: updated_sender,
        recipient: updated_recipient,
        sender_record,
        recipient_record,
    })
}

/// Administrator balance adjustment. Sign-agnostic, bypasses the frozen
/// check; a non-empty description is mandatory.
pub fn apply_correction(
    user: &User,
    signed_amount: Decimal,
    description: &str,
    timestamp: DateTime<Utc>,
) -> Result<LedgerUpdate> {
    if description.trim().is_empty() {
        return Err(LedgerError::InvalidDescription);
    }
    if signed_amount == Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(
            "correction amount must be non-zero".to_string(),
        ));
    }

    let mut updated = user.clone();
    updated.balance = round2(user.balance + signed_amount);

    let record = new_record(
        user,
        TransactionKind::Correction,
        signed_amount,
        updated.balance,
        description.to_string(),
        timestamp,
    );
    Ok(LedgerUpdate { user: updated, record })
}

/// Pure status flip. No balance or ledger effect: freezing never touches
/// already-recorded transactions, only future withdrawals and transfers.
pub fn set_account_status(user: &User, status: AccountStatus) -> User {
    let mut updated = user.clone();
    updated.status = status;
    updated
}
