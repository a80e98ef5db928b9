pub mod transaction;
pub mod user;

pub use transaction::{Transaction, TransactionKind};
pub use user::{AccountStatus, Role, User};
