use crate::{
    ledger::{Clock, Ledger, SystemClock},
    storage::{LedgerStore, Result as StoreResult},
};

use super::{
    commands,
    core::{CommandError, CommandResult},
    input::{Input, LineSource},
    menu::{self, APP_TITLE},
    output,
    registry::CommandRegistry,
};

/// Everything a menu handler can touch: the ledger, where it is stored, and
/// where input comes from.
pub struct ShellContext {
    pub ledger: Ledger,
    pub store: Box<dyn LedgerStore>,
    pub registry: CommandRegistry,
    pub clock: Box<dyn Clock>,
    input: Box<dyn LineSource>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(ledger: Ledger, store: Box<dyn LedgerStore>, input: Box<dyn LineSource>) -> Self {
        Self {
            ledger,
            store,
            registry: commands::registry(),
            clock: Box::new(SystemClock),
            input,
            running: true,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Reads one line; interrupts and end of input surface as errors so
    /// handlers can bail out with `?`.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, CommandError> {
        match self.input.read_line(prompt)? {
            Input::Line(line) => Ok(line),
            Input::Interrupted => Err(CommandError::Interrupted),
            Input::Closed => Err(CommandError::InputClosed),
        }
    }

    pub fn dispatch(&mut self, choice: &str) -> CommandResult {
        match self.registry.handler(choice) {
            Some(handler) => handler(self),
            None => {
                output::info(format!("\n{}", menu::invalid_choice_message(&self.registry)));
                Ok(())
            }
        }
    }

    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.ledger)
    }

    /// Ends the session: explains why, saves, and says goodbye. A failed save
    /// is reported but never blocks termination.
    pub fn shut_down(&mut self, reason: &CommandError) {
        match reason {
            CommandError::Interrupted => output::info("\n\nApplication interrupted. Exiting..."),
            CommandError::InputClosed => output::info("\n\nInput closed. Exiting..."),
            CommandError::Cli(err) => output::error(format!("Input failed: {err}")),
            CommandError::ExitRequested | CommandError::Ledger(_) => {}
        }

        output::info("\nSaving your data...");
        if let Err(err) = self.save() {
            tracing::warn!(error = %err, path = %self.store.location().display(), "exit save failed");
            output::warning(format!("Could not save data: {err}"));
        }
        output::info(format!("Thank you for using {APP_TITLE}!"));
        output::info("Goodbye!");
        self.running = false;
    }
}
