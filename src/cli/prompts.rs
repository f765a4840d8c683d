use thiserror::Error;

use crate::ledger::Period;

use super::{core::CommandError, output, shell_context::ShellContext};

pub const AMOUNT_PROMPT: &str = "Enter income amount: $";

/// Why typed amount text was refused. Never leaves the prompt loop.
#[derive(Debug, Error, PartialEq)]
pub enum AmountInputError {
    #[error("Invalid number. Please try again.")]
    Malformed,
    #[error("Amount must be positive. Please try again.")]
    Negative,
}

pub fn parse_amount(raw: &str) -> Result<f64, AmountInputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AmountInputError::Malformed)?;
    if !value.is_finite() {
        return Err(AmountInputError::Malformed);
    }
    if value < 0.0 {
        return Err(AmountInputError::Negative);
    }
    Ok(value)
}

/// Prompts until a finite, non-negative amount is entered.
pub fn amount(context: &mut ShellContext) -> Result<f64, CommandError> {
    loop {
        let raw = context.read_line(AMOUNT_PROMPT)?;
        match parse_amount(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => output::error(err),
        }
    }
}

pub fn period_key_prompt(period: Period) -> String {
    format!(
        "Enter {} ({}) or press Enter for {}: ",
        period.noun(),
        period.key_hint(),
        period.current_label()
    )
}

/// Optional period key; blank input means "current period".
pub fn period_key(
    context: &mut ShellContext,
    period: Period,
) -> Result<Option<String>, CommandError> {
    let raw = context.read_line(&period_key_prompt(period))?;
    let trimmed = raw.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount("  42.5 "), Ok(42.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        for raw in ["", "abc", "12,50", "NaN", "inf", "-infinity"] {
            assert_eq!(parse_amount(raw), Err(AmountInputError::Malformed), "{raw}");
        }
    }

    #[test]
    fn rejects_negative_values() {
        assert_eq!(parse_amount("-5"), Err(AmountInputError::Negative));
    }

    #[test]
    fn key_prompt_mentions_format_and_default() {
        assert_eq!(
            period_key_prompt(Period::Monthly),
            "Enter month (YYYY-MM) or press Enter for current month: "
        );
    }
}
