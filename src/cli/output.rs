use colored::Colorize;
use std::fmt;

use crate::config::Config;

const RULE_WIDTH: usize = 50;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Applies output preferences from the loaded configuration.
pub fn configure(config: &Config) {
    if !config.color_output {
        colored::control::set_override(false);
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => format!("✓ {text}").bright_green().to_string(),
        MessageKind::Warning => format!("Warning: {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("Error: {text}").bright_red().to_string(),
        MessageKind::Section => format!("--- {} ---", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
