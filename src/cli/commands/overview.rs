use crate::cli::core::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::{format_amount, report::section_lines, Period};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("7", "View All Budgets", cmd_view_all),
        CommandEntry::new("8", "View Summary", cmd_summary),
    ]
}

fn cmd_view_all(context: &mut ShellContext) -> CommandResult {
    output::section("All Budgets");
    for period in Period::ALL {
        let entries = context.ledger.list_all(period);
        output::info("");
        for line in section_lines(period, entries) {
            output::info(line);
        }
        if !entries.is_empty() {
            output::info(format!(
                "  Total: {}",
                format_amount(context.ledger.total(period))
            ));
        }
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext) -> CommandResult {
    output::info(format!("\n{}", context.ledger.summary()));
    Ok(())
}
