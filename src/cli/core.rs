use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::LedgerError;

/// Failures of the terminal itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Interrupt handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Outcome of a menu handler that is not a plain success.
///
/// Only [`CommandError::Ledger`] keeps the shell running; every other variant
/// ends the session after a best-effort save.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("input interrupted")]
    Interrupted,
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Cli(#[from] CliError),
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
