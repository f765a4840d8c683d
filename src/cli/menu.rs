use super::{output, registry::CommandRegistry};

pub const APP_TITLE: &str = "Finance Budget Application";

pub fn print_welcome() {
    output::info(format!("Welcome to {APP_TITLE}!"));
    output::info("Track your income daily, monthly, and yearly.");
}

/// Prints the numbered menu framed by rules, in registration order.
pub fn render(registry: &CommandRegistry) {
    let rule = output::rule();
    output::info(format!("\n{rule}"));
    output::info(APP_TITLE);
    output::info(&rule);
    for entry in registry.entries() {
        output::info(format!("{}. {}", entry.key, entry.label));
    }
    output::info(&rule);
}

/// Prompt shown when waiting for a menu choice, e.g. `Enter your choice (0-10): `.
pub fn choice_prompt(registry: &CommandRegistry) -> String {
    let (low, high) = registry.choice_range().unwrap_or_default();
    format!("\nEnter your choice ({low}-{high}): ")
}

pub fn invalid_choice_message(registry: &CommandRegistry) -> String {
    let (low, high) = registry.choice_range().unwrap_or_default();
    format!("Invalid choice. Please enter a number between {low} and {high}.")
}
