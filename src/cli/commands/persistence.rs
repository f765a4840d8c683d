use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("9", "Save Budget Data", cmd_save),
        CommandEntry::new("10", "Load Budget Data", cmd_load),
    ]
}

fn cmd_save(context: &mut ShellContext) -> CommandResult {
    let path = context.store.location().display().to_string();
    match context.save() {
        Ok(()) => output::success(format!("Budget data saved to {path}")),
        Err(err) => {
            tracing::warn!(error = %err, path = %path, "save failed");
            output::error(format!("Error saving data: {err}"));
        }
    }
    Ok(())
}

fn cmd_load(context: &mut ShellContext) -> CommandResult {
    let path = context.store.location().display().to_string();
    match context.store.load() {
        Ok(Some(ledger)) => {
            context.ledger = ledger;
            output::success(format!("Budget data loaded from {path}"));
        }
        Ok(None) => output::info(format!("No saved data at {path}; keeping current budgets")),
        Err(err) => output::error(format!("Error loading data: {err}")),
    }
    Ok(())
}
