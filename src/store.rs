use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{LedgerError, Result};
use crate::ledger;
use crate::models::{AccountStatus, Transaction, User};

/// Caller-owned in-memory store: the user collection and the append-only
/// transaction ledger, kept sorted by timestamp descending at all times.
///
/// The committing wrappers resolve the users involved, run the pure
/// ledger functions, and apply the results. A rejected operation leaves
/// the store unchanged; a transfer's two balance updates and two record
/// insertions are applied within one `&mut self` call, so no caller can
/// observe one without the other.
#[derive(Debug, Clone, Default)]
pub struct BankStore {
    users: HashMap<Uuid, User>,
    /// Newest first
    transactions: Vec<Transaction>,
}

impl BankStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    pub fn user_by_account_number(&self, account_number: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.account_number == account_number)
    }

    /// All users, sorted by account number for deterministic output
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        users
    }

    /// The full ledger, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// One user's ledger records, newest first
    pub fn transactions_for(&self, user_id: Uuid) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .collect()
    }

    fn require_user(&self, id: Uuid) -> Result<&User> {
        self.users.get(&id).ok_or(LedgerError::UserNotFound(id))
    }

    // Sorted insert instead of re-sorting the whole ledger on every
    // write. Ties go before existing records with the same timestamp.
    pub(crate) fn insert_transaction(&mut self, tx: Transaction) {
        let pos = self
            .transactions
            .partition_point(|existing| existing.timestamp > tx.timestamp);
        self.transactions.insert(pos, tx);
    }

    fn commit(&mut self, update: ledger::LedgerUpdate) -> Transaction {
        let record = update.record.clone();
        self.users.insert(update.user.id, update.user);
        self.insert_transaction(update.record);
        record
    }

    /// Deposit into a user's account
    pub fn deposit(
        &mut self,
        user_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let user = self.require_user(user_id)?;
        let update = ledger::apply_deposit(user, amount, description, Utc::now())?;
        Ok(self.commit(update))
    }

    /// Withdraw from a user's account
    pub fn withdraw(
        &mut self,
        user_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let user = self.require_user(user_id)?;
        let update = ledger::apply_withdrawal(user, amount, description, Utc::now())?;
        Ok(self.commit(update))
    }

    /// Transfer to the account identified by `to_account`. Both balance
    /// updates and both records are applied as one unit.
    pub fn transfer(
        &mut self,
        sender_id: Uuid,
        to_account: &str,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<(Transaction, Transaction)> {
        let sender = self.require_user(sender_id)?;
        let recipient = self
            .user_by_account_number(to_account)
            .filter(|r| r.id != sender_id)
            .ok_or_else(|| LedgerError::InvalidRecipient(to_account.to_string()))?;

        let update = ledger::apply_transfer(sender, recipient, amount, description, Utc::now())?;

        self.users.insert(update.sender.id, update.sender);
        self.users.insert(update.recipient.id, update.recipient);
        let records = (update.sender_record.clone(), update.recipient_record.clone());
        self.insert_transaction(update.sender_record);
        self.insert_transaction(update.recipient_record);
        Ok(records)
    }

    /// Administrator balance correction
    pub fn correct(
        &mut self,
        user_id: Uuid,
        signed_amount: Decimal,
        description: &str,
    ) -> Result<Transaction> {
        let user = self.require_user(user_id)?;
        let update = ledger::apply_correction(user, signed_amount, description, Utc::now())?;
        Ok(self.commit(update))
    }

    /// Flip a user's account status. No ledger record is produced.
    pub fn set_status(&mut self, user_id: Uuid, status: AccountStatus) -> Result<User> {
        let user = self.require_user(user_id)?;
        let updated = ledger::set_account_status(user, status);
        self.users.insert(updated.id, updated.clone());
        Ok(updated)
    }
}
