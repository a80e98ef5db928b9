use bank_ledger::models::{AccountStatus, User};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

/// Helper to create an active user with a given balance
pub fn make_user(name: &str, account_number: &str, balance: Decimal) -> User {
    User::new(
        name,
        &format!("user{account_number}@example.com"),
        "password",
        account_number,
    )
    .with_balance(balance)
}

/// Helper to create a frozen user with a given balance
pub fn make_frozen_user(name: &str, account_number: &str, balance: Decimal) -> User {
    let mut user = make_user(name, account_number, balance);
    user.status = AccountStatus::Frozen;
    user
}

/// Helper to build a fixed UTC timestamp
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_user() {
        let user = make_user("Alice", "1111", dec!(100));
        assert_eq!(user.account_number, "1111");
        assert_eq!(user.balance, dec!(100));
        assert!(!user.is_frozen());
    }

    #[test]
    fn test_make_frozen_user() {
        let user = make_frozen_user("Bob", "2222", dec!(50));
        assert!(user.is_frozen());
    }
}
