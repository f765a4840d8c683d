use super::core::CommandResult;
use super::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext) -> CommandResult;

/// A numbered menu entry and the handler it dispatches to.
pub struct CommandEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(key: &'static str, label: &'static str, handler: CommandHandler) -> Self {
        Self {
            key,
            label,
            handler,
        }
    }
}

/// Menu entries in display order.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl FromIterator<CommandEntry> for CommandRegistry {
    fn from_iter<I: IntoIterator<Item = CommandEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl CommandRegistry {
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn find(&self, key: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn handler(&self, key: &str) -> Option<CommandHandler> {
        self.find(key).map(|entry| entry.handler)
    }

    /// Lowest and highest numeric choice on the menu.
    pub fn choice_range(&self) -> Option<(u32, u32)> {
        let mut choices = self.entries.iter().filter_map(|entry| entry.key.parse().ok());
        let first: u32 = choices.next()?;
        Some(choices.fold((first, first), |(low, high), choice| {
            (low.min(choice), high.max(choice))
        }))
    }
}
