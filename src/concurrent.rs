use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AccountStatus, Transaction, User};
use crate::store::BankStore;

/// Thread-safe handle around a [`BankStore`] for concurrent request
/// handlers.
///
/// A single async `RwLock` guards the whole store. That is deliberate:
/// a transfer mutates two users and inserts two records, and the
/// atomicity contract requires that no caller observe one applied
/// without the other. Holding the write lock across the entire
/// `BankStore::transfer` call is the single critical section that
/// serializes the two-account update, so lost updates and partial
/// application cannot occur. Reads take the read lock and may proceed
/// concurrently with each other.
pub struct SharedBank {
    inner: Arc<RwLock<BankStore>>,
}

impl SharedBank {
    pub fn new(store: BankStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Cheap handle clone for sharing across tokio tasks
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    pub async fn deposit(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let mut store = self.inner.write().await;
        store.deposit(user_id, amount, description)
    }

    pub async fn withdraw(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let mut store = self.inner.write().await;
        store.withdraw(user_id, amount, description)
    }

    pub async fn transfer(
        &self,
        sender_id: Uuid,
        to_account: &str,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<(Transaction, Transaction)> {
        let mut store = self.inner.write().await;
        store.transfer(sender_id, to_account, amount, description)
    }

    pub async fn correct(
        &self,
        user_id: Uuid,
        signed_amount: Decimal,
        description: &str,
    ) -> Result<Transaction> {
        let mut store = self.inner.write().await;
        store.correct(user_id, signed_amount, description)
    }

    pub async fn set_status(&self, user_id: Uuid, status: AccountStatus) -> Result<User> {
        let mut store = self.inner.write().await;
        store.set_status(user_id, status)
    }

    pub async fn user(&self, user_id: Uuid) -> Option<User> {
        let store = self.inner.read().await;
        store.user(user_id).cloned()
    }

    pub async fn users(&self) -> Vec<User> {
        let store = self.inner.read().await;
        store.users().into_iter().cloned().collect()
    }

    /// Snapshot of the full ledger, newest first
    pub async fn transactions(&self) -> Vec<Transaction> {
        let store = self.inner.read().await;
        store.transactions().to_vec()
    }

    /// Snapshot of one user's ledger records, newest first
    pub async fn transactions_for(&self, user_id: Uuid) -> Vec<Transaction> {
        let store = self.inner.read().await;
        store
            .transactions_for(user_id)
            .into_iter()
            .cloned()
            .collect()
    }
}
