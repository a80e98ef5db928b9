use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Operation rejections and system-level failures.
/// Domain variants are user-input validation failures: the requested
/// operation is refused with no partial state change and no retry policy.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("account is frozen")]
    AccountFrozen,

    #[error("a description is required")]
    InvalidDescription,

    #[error("invalid recipient account: {0}")]
    InvalidRecipient(String),

    #[error("unknown user: {0}")]
    UserNotFound(Uuid),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
