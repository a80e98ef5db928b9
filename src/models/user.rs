use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

/// Account status. Freezing blocks withdrawals and transfers but not
/// deposits or admin corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Frozen,
}

/// A bank user. Seeded at startup and mutated in place by ledger
/// operations and status changes; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Plain-text stand-in; this is a demo, not real credential storage.
    pub password_hash: String,
    pub account_number: String,
    pub balance: Decimal,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active customer with a zero balance
    pub fn new(name: &str, email: &str, password: &str, account_number: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password.to_string(),
            account_number: account_number.to_string(),
            balance: Decimal::ZERO,
            role: Role::Customer,
            status: AccountStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.status == AccountStatus::Frozen
    }
}
