use chrono::{DateTime, TimeZone, Utc};
use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Role, Transaction, TransactionKind, User};
use crate::store::BankStore;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("static demo timestamp")
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("static demo amount")
}

fn record(
    user_id: Uuid,
    kind: TransactionKind,
    amount: &str,
    balance_after: &str,
    description: &str,
    timestamp: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        user_id,
        kind,
        amount: dec(amount),
        balance_after: dec(balance_after),
        description: description.to_string(),
        timestamp,
    }
}

/// A store pre-populated with the demo customer and administrator, plus
/// a transaction history whose running balances match the customer's
/// seeded balance. In a real application this data would come from a
/// database.
pub fn demo_store() -> BankStore {
    let mut customer = User::new("Jane Doe", "customer@bankpro.com", "password123", "1234567890");
    customer.created_at = at(2022, 1, 15, 9, 0);
    customer.balance = dec("15179.50");

    let mut admin = User::new("John Smith", "admin@bankpro.com", "adminpass", "0987654321")
        .with_role(Role::Admin);
    admin.created_at = at(2021, 11, 20, 14, 0);

    let history = [
        record(
            customer.id,
            TransactionKind::Deposit,
            "5000",
            "5000",
            "Initial deposit",
            at(2023, 10, 1, 10, 0),
        ),
        record(
            customer.id,
            TransactionKind::Withdrawal,
            "-200",
            "4800",
            "ATM Withdrawal",
            at(2023, 10, 5, 18, 30),
        ),
        record(
            customer.id,
            TransactionKind::Deposit,
            "2500",
            "7300",
            "Paycheck",
            at(2023, 11, 1, 9, 5),
        ),
        record(
            customer.id,
            TransactionKind::Withdrawal,
            "-120.50",
            "7179.50",
            "Grocery Store",
            at(2023, 11, 3, 16, 45),
        ),
        record(
            customer.id,
            TransactionKind::Deposit,
            "8000",
            "15179.50",
            "Project Bonus",
            at(2023, 12, 15, 14, 0),
        ),
    ];

    let mut store = BankStore::new();
    store.add_user(customer);
    store.add_user(admin);
    for tx in history {
        store.insert_transaction(tx);
    }
    store
}
