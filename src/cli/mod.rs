//! Numbered-menu shell over a [`crate::ledger::Ledger`].

pub mod commands;
pub mod core;
pub mod input;
pub mod menu;
pub mod output;
pub mod prompts;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use self::core::{CliError, CommandError, CommandResult, LoopControl};
pub use input::{Input, LineSource, ReadlineSource, ScriptSource};
pub use shell::{run_cli, run_loop};
pub use shell_context::ShellContext;
