mod common;

use bank_ledger::error::LedgerError;
use bank_ledger::ledger::{
    apply_correction, apply_deposit, apply_transfer, apply_withdrawal, round2,
    set_account_status,
};
use bank_ledger::models::{AccountStatus, TransactionKind};
use common::{make_frozen_user, make_user, ts};
use rust_decimal_macros::dec;

#[test]
fn test_deposit_updates_balance_and_record() {
    // Concrete scenario: balance 100.00, deposit 50.00 -> 150.00
    let user = make_user("Alice", "1111", dec!(100.00));
    let update = apply_deposit(&user, dec!(50.00), None, ts(2024, 1, 1, 12, 0)).unwrap();

    assert_eq!(update.user.balance, dec!(150.00));
    assert_eq!(update.record.kind, TransactionKind::Deposit);
    assert_eq!(update.record.amount, dec!(50.00));
    assert_eq!(update.record.balance_after, dec!(150.00));
    assert_eq!(update.record.user_id, user.id);
    // The input user is untouched; the caller owns the commit
    assert_eq!(user.balance, dec!(100.00));
}

#[test]
fn test_deposit_default_description() {
    let user = make_user("Alice", "1111", dec!(0));
    let update = apply_deposit(&user, dec!(1), None, ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.record.description, "Cash Deposit");

    let update = apply_deposit(&user, dec!(1), Some("Paycheck"), ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.record.description, "Paycheck");
}

#[test]
fn test_deposit_rejects_non_positive_amounts() {
    let user = make_user("Alice", "1111", dec!(100));

    let err = apply_deposit(&user, dec!(0), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));

    let err = apply_deposit(&user, dec!(-5), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn test_deposit_allowed_on_frozen_account() {
    // Freezing blocks withdrawals and transfers, not deposits
    let user = make_frozen_user("Alice", "1111", dec!(100));
    let update = apply_deposit(&user, dec!(25), None, ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.user.balance, dec!(125));
}

#[test]
fn test_withdrawal_updates_balance_and_record() {
    let user = make_user("Alice", "1111", dec!(100.00));
    let update = apply_withdrawal(&user, dec!(30.00), None, ts(2024, 1, 1, 12, 0)).unwrap();

    assert_eq!(update.user.balance, dec!(70.00));
    assert_eq!(update.record.kind, TransactionKind::Withdrawal);
    assert_eq!(update.record.amount, dec!(-30.00));
    assert_eq!(update.record.balance_after, dec!(70.00));
}

#[test]
fn test_withdrawal_of_entire_balance_succeeds() {
    let user = make_user("Alice", "1111", dec!(100));
    let update = apply_withdrawal(&user, dec!(100), None, ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.user.balance, dec!(0));
}

#[test]
fn test_withdrawal_rejects_insufficient_funds() {
    let user = make_user("Alice", "1111", dec!(100));
    let err = apply_withdrawal(&user, dec!(100.01), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
}

#[test]
fn test_withdrawal_rejects_frozen_account() {
    let user = make_frozen_user("Alice", "1111", dec!(100));
    let err = apply_withdrawal(&user, dec!(10), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::AccountFrozen));
}

#[test]
fn test_withdrawal_rejects_non_positive_amounts() {
    let user = make_user("Alice", "1111", dec!(100));
    let err = apply_withdrawal(&user, dec!(-10), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn test_transfer_moves_funds_and_emits_two_records() {
    // Concrete scenario: sender 100.00 transfers 30.00 to recipient 20.00
    let sender = make_user("Alice", "1111", dec!(100.00));
    let recipient = make_user("Bob", "2222", dec!(20.00));
    let when = ts(2024, 1, 1, 12, 0);

    let update = apply_transfer(&sender, &recipient, dec!(30.00), None, when).unwrap();

    assert_eq!(update.sender.balance, dec!(70.00));
    assert_eq!(update.recipient.balance, dec!(50.00));

    assert_eq!(update.sender_record.amount, dec!(-30.00));
    assert_eq!(update.recipient_record.amount, dec!(30.00));
    assert_eq!(update.sender_record.balance_after, dec!(70.00));
    assert_eq!(update.recipient_record.balance_after, dec!(50.00));
    assert_ne!(update.sender_record.id, update.recipient_record.id);
    assert_eq!(update.sender_record.timestamp, when);
    assert_eq!(update.recipient_record.timestamp, when);

    // Both records carry both parties' account numbers symmetrically
    let expected_kind = TransactionKind::Transfer {
        from: "1111".to_string(),
        to: "2222".to_string(),
    };
    assert_eq!(update.sender_record.kind, expected_kind);
    assert_eq!(update.recipient_record.kind, expected_kind);
}

#[test]
fn test_transfer_default_descriptions_name_the_counterparty() {
    let sender = make_user("Alice", "1111", dec!(100));
    let recipient = make_user("Bob", "2222", dec!(0));
    let update =
        apply_transfer(&sender, &recipient, dec!(10), None, ts(2024, 1, 1, 12, 0)).unwrap();

    assert_eq!(update.sender_record.description, "Transfer to Bob");
    assert_eq!(update.recipient_record.description, "Transfer from Alice");
}

#[test]
fn test_transfer_rejects_insufficient_funds() {
    let sender = make_user("Alice", "1111", dec!(100));
    let recipient = make_user("Bob", "2222", dec!(0));
    let err =
        apply_transfer(&sender, &recipient, dec!(150), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
}

#[test]
fn test_transfer_rejects_frozen_sender() {
    let sender = make_frozen_user("Alice", "1111", dec!(100));
    let recipient = make_user("Bob", "2222", dec!(0));
    let err =
        apply_transfer(&sender, &recipient, dec!(10), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::AccountFrozen));
}

#[test]
fn test_transfer_to_frozen_recipient_succeeds() {
    // Receiving funds is a credit, which freezing does not block
    let sender = make_user("Alice", "1111", dec!(100));
    let recipient = make_frozen_user("Bob", "2222", dec!(0));
    let update =
        apply_transfer(&sender, &recipient, dec!(10), None, ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.recipient.balance, dec!(10));
}

#[test]
fn test_transfer_rejects_self_transfer() {
    let sender = make_user("Alice", "1111", dec!(100));
    let err = apply_transfer(&sender, &sender, dec!(10), None, ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRecipient(_)));
}

#[test]
fn test_correction_applies_signed_amount() {
    // Concrete scenario: correction of -15.25 on balance 200.00 -> 184.75
    let user = make_user("Alice", "1111", dec!(200.00));
    let update =
        apply_correction(&user, dec!(-15.25), "Fee reversal", ts(2024, 1, 1, 12, 0)).unwrap();

    assert_eq!(update.user.balance, dec!(184.75));
    assert_eq!(update.record.kind, TransactionKind::Correction);
    assert_eq!(update.record.amount, dec!(-15.25));
    assert_eq!(update.record.balance_after, dec!(184.75));
}

#[test]
fn test_correction_positive_amount_succeeds() {
    let user = make_user("Alice", "1111", dec!(10));
    let update =
        apply_correction(&user, dec!(5.50), "Interest adjustment", ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.user.balance, dec!(15.50));
}

#[test]
fn test_correction_allowed_on_frozen_account() {
    let user = make_frozen_user("Alice", "1111", dec!(100));
    let update =
        apply_correction(&user, dec!(-20), "Chargeoff adjustment", ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.user.balance, dec!(80));
}

#[test]
fn test_correction_rejects_blank_description() {
    let user = make_user("Alice", "1111", dec!(100));

    let err = apply_correction(&user, dec!(10), "", ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidDescription));

    let err = apply_correction(&user, dec!(10), "   ", ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidDescription));
}

#[test]
fn test_correction_rejects_zero_amount() {
    let user = make_user("Alice", "1111", dec!(100));
    let err = apply_correction(&user, dec!(0), "No-op", ts(2024, 1, 1, 12, 0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
}

#[test]
fn test_set_account_status_flips_without_ledger_effect() {
    let user = make_user("Alice", "1111", dec!(100));

    let frozen = set_account_status(&user, AccountStatus::Frozen);
    assert!(frozen.is_frozen());
    assert_eq!(frozen.balance, dec!(100));

    let thawed = set_account_status(&frozen, AccountStatus::Active);
    assert!(!thawed.is_frozen());
}

#[test]
fn test_round2_midpoints_round_away_from_zero() {
    assert_eq!(round2(dec!(100.005)), dec!(100.01));
    assert_eq!(round2(dec!(-100.005)), dec!(-100.01));
    assert_eq!(round2(dec!(1.004)), dec!(1.00));
    assert_eq!(round2(dec!(2.5)), dec!(2.50));
}

#[test]
fn test_balances_are_rounded_to_two_decimals() {
    let user = make_user("Alice", "1111", dec!(100.00));
    let update = apply_deposit(&user, dec!(0.005), None, ts(2024, 1, 1, 12, 0)).unwrap();
    assert_eq!(update.user.balance, dec!(100.01));
    assert_eq!(update.record.balance_after, dec!(100.01));
}

#[test]
fn test_credit_classification() {
    let user = make_user("Alice", "1111", dec!(100));
    let recipient = make_user("Bob", "2222", dec!(0));
    let when = ts(2024, 1, 1, 12, 0);

    let deposit = apply_deposit(&user, dec!(10), None, when).unwrap().record;
    assert!(deposit.is_credit());

    let withdrawal = apply_withdrawal(&user, dec!(10), None, when).unwrap().record;
    assert!(!withdrawal.is_credit());

    let transfer = apply_transfer(&user, &recipient, dec!(10), None, when).unwrap();
    assert!(!transfer.sender_record.is_credit());
    // Incoming transfers are debit-styled too; only deposits and
    // non-negative corrections count as credits for display
    assert!(!transfer.recipient_record.is_credit());

    let credit_fix = apply_correction(&user, dec!(5), "Adjustment", when).unwrap().record;
    assert!(credit_fix.is_credit());

    let debit_fix = apply_correction(&user, dec!(-5), "Adjustment", when).unwrap().record;
    assert!(!debit_fix.is_credit());
}
