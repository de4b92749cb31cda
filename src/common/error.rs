use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing intents csv path. usage: cargo run -- <intents.csv> [--statement]")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Raised while building the account directory from its seed records.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("handle {0:?} is derived by more than one account")]
    DuplicateHandle(String),
    #[error("owner {0:?} does not yield a login handle")]
    EmptyHandle(String),
}

/// A declined ledger operation. No account is mutated when one of these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no account with handle {0:?}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] Validation),
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("no active session")]
    NoSession,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    #[error("amount {0} must be positive")]
    NonPositiveAmount(Money),
    #[error("balance {balance} does not cover {amount}")]
    InsufficientBalance { balance: Money, amount: Money },
    #[error("cannot transfer to the same account")]
    SelfTransfer,
    #[error("receiver {0:?} does not exist")]
    UnknownReceiver(String),
    #[error("no movement reaches 10% of the requested loan {0}")]
    InsufficientCollateral(Money),
    #[error("appending {0} would overflow the account totals")]
    AmountOverflow(Money),
}
