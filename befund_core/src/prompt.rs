//! Line-based interactive prompts.
//!
//! [`Prompter`] reads answers from any `BufRead` and writes prompts to any
//! `Write`, so the CLI hands it the terminal and tests hand it byte buffers.

use crate::engine::OverrideProvider;
use crate::selector::{parse_affected, split_tokens};
use crate::{Item, MenuEntry, Result, Side};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

pub const CODES_PROMPT: &str = "\nWelche Kürzel sind gewünscht? (z.B. h, l, o) ";
pub const AFFECTED_PROMPT: &str = "Wo gibt es Auffälligkeiten? (Nummern) ? ";

/// Interactive question/answer session over a reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a prompt and read one trimmed answer line.
    ///
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Ask for a comma-separated list
    pub fn ask_tokens(&mut self, prompt: &str) -> Result<Vec<String>> {
        Ok(split_tokens(&self.ask(prompt)?))
    }

    /// Ask for comma-separated numbers, reporting every token that is dropped
    pub fn ask_numbers(&mut self, prompt: &str) -> Result<BTreeSet<i64>> {
        let parsed = parse_affected(&self.ask(prompt)?);
        for token in &parsed.invalid {
            writeln!(self.output, "Ignoriere ungültige Nummer: '{}'", token)?;
        }
        Ok(parsed.numbers)
    }

    /// Print the organ/code menu
    pub fn show_menu(&mut self, menu: &[MenuEntry]) -> Result<()> {
        writeln!(self.output, "\nVerfügbare Auswahl (Organ – Kürzel):")?;
        for entry in menu {
            writeln!(self.output, "- {} – {}", entry.organ, entry.code)?;
        }
        Ok(())
    }

    /// Print the selected items with the numbers used to mark them affected
    pub fn show_options(&mut self, items: &[Item]) -> Result<()> {
        writeln!(self.output, "\nOptionen:")?;
        for item in items {
            writeln!(self.output, "{}: {}", item.order, item.text)?;
        }
        Ok(())
    }

    /// Release the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> OverrideProvider for Prompter<R, W> {
    fn request_override(&mut self, item: &Item, side: Side) -> Result<Option<String>> {
        let prompt = match side.label() {
            Some(label) => format!("{} (leer = normal) – {}:\n> ", label, item.text),
            None => format!("Pathologisch (leer = normal) – {}:\n> ", item.text),
        };
        let answer = self.ask(&prompt)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }
}
