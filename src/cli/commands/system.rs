use crate::cli::core::{CommandError, CommandResult};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("0", "Exit", cmd_exit)]
}

fn cmd_exit(_context: &mut ShellContext) -> CommandResult {
    Err(CommandError::ExitRequested)
}
