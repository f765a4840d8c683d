use crate::cli::core::CommandResult;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::{output, prompts};
use crate::ledger::{format_amount, Period};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("1", "Add Daily Income", cmd_add_daily),
        CommandEntry::new("2", "Add Monthly Income", cmd_add_monthly),
        CommandEntry::new("3", "Add Yearly Income", cmd_add_yearly),
        CommandEntry::new("4", "View Daily Budget", cmd_view_daily),
        CommandEntry::new("5", "View Monthly Budget", cmd_view_monthly),
        CommandEntry::new("6", "View Yearly Budget", cmd_view_yearly),
    ]
}

fn cmd_add_daily(context: &mut ShellContext) -> CommandResult {
    add_income(context, Period::Daily)
}

fn cmd_add_monthly(context: &mut ShellContext) -> CommandResult {
    add_income(context, Period::Monthly)
}

fn cmd_add_yearly(context: &mut ShellContext) -> CommandResult {
    add_income(context, Period::Yearly)
}

fn cmd_view_daily(context: &mut ShellContext) -> CommandResult {
    view_income(context, Period::Daily)
}

fn cmd_view_monthly(context: &mut ShellContext) -> CommandResult {
    view_income(context, Period::Monthly)
}

fn cmd_view_yearly(context: &mut ShellContext) -> CommandResult {
    view_income(context, Period::Yearly)
}

fn add_income(context: &mut ShellContext, period: Period) -> CommandResult {
    output::section(format!("Add {} Income", period.title()));
    let amount = prompts::amount(context)?;
    let key = prompts::period_key(context, period)?;
    let booked = context
        .ledger
        .add_with_clock(period, key.as_deref(), amount, context.clock.as_ref())?;
    output::success(format!(
        "Added {} to {} income for {}",
        format_amount(amount),
        period.label(),
        booked
    ));
    Ok(())
}

fn view_income(context: &mut ShellContext, period: Period) -> CommandResult {
    output::section(format!("{} Budget", period.title()));
    let key = prompts::period_key(context, period)?;
    let key = period.resolve_key(key.as_deref(), context.clock.as_ref());
    let amount = context.ledger.get(period, Some(&key));
    output::info(format!("Budget for {}: {}", key, format_amount(amount)));
    Ok(())
}
