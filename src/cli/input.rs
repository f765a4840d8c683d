use std::{
    io::{self, BufRead, BufReader, Write},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use rustyline::{error::ReadlineError, DefaultEditor};

use super::core::CliError;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// End of input (Ctrl-D or a closed pipe).
    Closed,
}

/// Something the shell can prompt and read lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, CliError>;
}

/// Line editor with history for interactive terminals.
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Closed),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads lines from a plain reader (piped stdin or a script), echoing
/// prompts to stdout.
///
/// A reader thread forwards lines into a channel so that an interrupt can
/// end a read that is still blocked on the pipe.
pub struct ScriptSource {
    sender: Sender<io::Result<Input>>,
    events: Receiver<io::Result<Input>>,
}

impl ScriptSource {
    pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (sender, events) = mpsc::channel();
        let lines = sender.clone();
        thread::spawn(move || forward_lines(reader, lines));
        Self { sender, events }
    }

    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }

    /// Routes SIGINT to this source as [`Input::Interrupted`]. The handler is
    /// process-wide, so this succeeds at most once.
    pub fn forward_interrupts(&self) -> Result<(), CliError> {
        let interrupts = self.interrupter();
        ctrlc::set_handler(move || {
            let _ = interrupts.send(Ok(Input::Interrupted));
        })?;
        Ok(())
    }

    pub(crate) fn interrupter(&self) -> Sender<io::Result<Input>> {
        self.sender.clone()
    }
}

impl LineSource for ScriptSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        match self.events.recv() {
            Ok(event) => Ok(event?),
            Err(_) => Ok(Input::Closed),
        }
    }
}

fn forward_lines<R: BufRead>(mut reader: R, lines: Sender<io::Result<Input>>) {
    loop {
        let mut buffer = String::new();
        let event = match reader.read_line(&mut buffer) {
            Ok(0) => Ok(Input::Closed),
            Ok(_) => Ok(Input::Line(buffer.trim_end_matches(['\n', '\r']).to_string())),
            Err(err) => Err(err),
        };
        let last = !matches!(event, Ok(Input::Line(_)));
        if lines.send(event).is_err() || last {
            break;
        }
    }
}
