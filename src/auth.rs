use crate::error::{LedgerError, Result};
use crate::models::User;
use crate::store::BankStore;

/// Look up a user by email and check the credential. Frozen users
/// cannot log in. Unknown email and wrong password produce the same
/// error so login failures don't reveal which part was wrong.
pub fn authenticate<'a>(store: &'a BankStore, email: &str, password: &str) -> Result<&'a User> {
    let user = store
        .user_by_email(email)
        .filter(|u| u.password_hash == password)
        .ok_or(LedgerError::InvalidCredentials)?;

    if user.is_frozen() {
        return Err(LedgerError::AccountFrozen);
    }
    Ok(user)
}
