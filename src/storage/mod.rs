pub mod json_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over the place a ledger is persisted between sessions.
pub trait LedgerStore {
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Ledger>>;

    fn location(&self) -> &Path;
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonFileStore};
