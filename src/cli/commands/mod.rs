pub mod income;
pub mod overview;
pub mod persistence;
pub mod system;

use super::registry::CommandRegistry;

/// Builds the numbered menu: choices 1-10 followed by 0 to exit.
pub(crate) fn registry() -> CommandRegistry {
    income::definitions()
        .into_iter()
        .chain(overview::definitions())
        .chain(persistence::definitions())
        .chain(system::definitions())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_run_one_through_ten_then_zero() {
        let registry = registry();
        let keys: Vec<_> = registry.entries().iter().map(|entry| entry.key).collect();
        assert_eq!(
            keys,
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "0"]
        );
        assert_eq!(registry.find("8").map(|entry| entry.label), Some("View Summary"));
        assert_eq!(registry.choice_range(), Some((0, 10)));
        assert!(registry.handler("11").is_none());
    }
}
