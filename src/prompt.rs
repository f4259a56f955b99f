// ⌨️ Prompt Layer - blocking console input with re-prompt-until-valid
//
// Invalid input is recovered right here by asking again; nothing invalid
// ever reaches the catalog. The reader and writer are injected so tests
// drive the loops with a Cursor instead of a terminal. The loops only end
// on valid input or a closed input stream; an interactive stdin never
// closes, so in production these are the intentional unbounded retries of
// a console program.

use crate::continent::Continent;
use crate::normalize::title_case;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt`, read one line, return it trimmed. Empty lines are
    /// allowed here; the typed contracts below decide what to reject.
    pub fn read_line_trimmed(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if bytes == 0 {
            bail!("input stream closed while waiting for input");
        }

        Ok(line.trim().to_string())
    }

    /// Read a non-empty, non-numeric label and render it in title case.
    ///
    /// Rejects empty-after-trim input and input that is nothing but digits
    /// (a country named "123" is a typo, not a name).
    pub fn read_label(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line_trimmed(prompt)?;

            if line.is_empty() {
                writeln!(self.output, "❌ The name cannot be empty.")?;
                continue;
            }
            if line.chars().all(|c| c.is_ascii_digit()) {
                writeln!(self.output, "❌ The name cannot be only digits.")?;
                continue;
            }

            return Ok(title_case(&line));
        }
    }

    /// Read an integer ≥ 0. Zero is a valid value.
    pub fn read_non_negative_int(&mut self, prompt: &str) -> Result<u64> {
        loop {
            let line = self.read_line_trimmed(prompt)?;

            if line.is_empty() {
                writeln!(self.output, "❌ A number is required.")?;
                continue;
            }

            match line.parse::<i64>() {
                Ok(value) if value < 0 => {
                    writeln!(self.output, "❌ The value cannot be negative.")?;
                }
                Ok(value) => return Ok(value as u64),
                Err(_) => {
                    writeln!(self.output, "❌ \"{}\" is not a whole number.", line)?;
                }
            }
        }
    }

    /// Read a continent name and resolve it to its canonical form.
    ///
    /// Any case/accent spelling of the six canonical labels is accepted;
    /// the returned value is always the canonical variant, never raw input.
    pub fn read_continent(&mut self, prompt: &str) -> Result<Continent> {
        loop {
            let line = self.read_line_trimmed(prompt)?;

            if line.is_empty() {
                writeln!(self.output, "❌ The continent cannot be empty.")?;
                continue;
            }

            match Continent::from_input(&line) {
                Some(continent) => return Ok(continent),
                None => {
                    let options: Vec<&str> =
                        Continent::ALL.iter().map(|c| c.as_str()).collect();
                    writeln!(
                        self.output,
                        "❌ Unknown continent \"{}\". Valid options: {}",
                        line,
                        options.join(", ")
                    )?;
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
