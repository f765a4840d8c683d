use std::collections::BTreeMap;

use super::period::Period;

pub const SUMMARY_TITLE: &str = "=== Budget Summary ===";

/// Formats an amount as dollars with two decimals, e.g. `$150.00`.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Lines for one period section: a heading, then `  key: $amount` per entry
/// or a placeholder when the section is empty.
pub fn section_lines(period: Period, entries: &BTreeMap<String, f64>) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{} Budgets:", period.title()));
    if entries.is_empty() {
        lines.push(format!("  No {} budgets recorded", period.label()));
    } else {
        lines.extend(
            entries
                .iter()
                .map(|(key, amount)| format!("  {}: {}", key, format_amount(*amount))),
        );
    }
    lines
}
