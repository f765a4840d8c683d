use std::io::{self, IsTerminal};

use crate::{
    config::Config,
    ledger::Ledger,
    storage::{JsonFileStore, LedgerStore},
};

use super::{
    core::{CommandError, LoopControl},
    input::{LineSource, ReadlineSource, ScriptSource},
    menu, output,
    shell_context::ShellContext,
};

/// Loads the configured ledger file, runs the menu until exit, and saves.
pub fn run_cli(config: &Config) {
    output::configure(config);

    let store = JsonFileStore::new(config.data_file.clone());
    let ledger = load_initial(&store);
    let mut context = ShellContext::new(ledger, Box::new(store), input_source());
    run_loop(&mut context);
}

/// Drives the menu until a handler ends the session.
pub fn run_loop(context: &mut ShellContext) {
    menu::print_welcome();

    while context.running {
        menu::render(&context.registry);
        let prompt = menu::choice_prompt(&context.registry);
        let outcome = context
            .read_line(&prompt)
            .and_then(|choice| context.dispatch(choice.trim()));

        if handle_outcome(context, outcome) == LoopControl::Exit {
            break;
        }
    }
}

fn handle_outcome(context: &mut ShellContext, outcome: Result<(), CommandError>) -> LoopControl {
    match outcome {
        Ok(()) => LoopControl::Continue,
        Err(CommandError::Ledger(err)) => {
            output::error(err);
            LoopControl::Continue
        }
        Err(reason) => {
            context.shut_down(&reason);
            LoopControl::Exit
        }
    }
}

fn load_initial(store: &JsonFileStore) -> Ledger {
    match store.load() {
        Ok(Some(ledger)) => ledger,
        Ok(None) => Ledger::new(),
        Err(err) => {
            tracing::warn!(error = %err, path = %store.location().display(), "startup load failed");
            output::warning(format!(
                "Could not load {}: {err}. Starting with empty budgets.",
                store.location().display()
            ));
            Ledger::new()
        }
    }
}

fn input_source() -> Box<dyn LineSource> {
    if io::stdin().is_terminal() {
        match ReadlineSource::new() {
            Ok(source) => return Box::new(source),
            Err(err) => {
                tracing::warn!(error = %err, "line editor unavailable, reading plain stdin");
            }
        }
    }
    // Without a line editor nothing turns Ctrl-C into input, so SIGINT is
    // routed into the script source instead of killing the process.
    let source = ScriptSource::stdin();
    if let Err(err) = source.forward_interrupts() {
        tracing::warn!(error = %err, "interrupt handler not installed");
    }
    Box::new(source)
}
