use thiserror::Error;

/// Error type that captures ledger and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Income amount must be positive (got {0})")]
    InvalidAmount(f64),
    #[error("Adding {amount} to {key} would overflow the stored total")]
    TotalOverflow { key: String, amount: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
