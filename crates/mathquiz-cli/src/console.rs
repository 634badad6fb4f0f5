//! Line-based console input for the interactive test.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use mathquiz_core::engine::Respondent;
use mathquiz_core::model::Question;

/// `true` for a case-insensitive "yes"; anything else is "no".
pub fn parse_yes_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Parse a submitted answer. Only finite real numbers are accepted.
pub fn parse_answer(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Prompts on `output` and reads replies from `input`, one line each.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line. End of input is
    /// an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read from stdin")?;
        anyhow::ensure!(read > 0, "input closed before the test was finished");
        // Invalid UTF-8 becomes replacement characters and is re-prompted.
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for the student's name until a non-blank one is given.
    pub fn read_name(&mut self) -> Result<String> {
        loop {
            let name = self.ask("Enter your name: ")?;
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.say("Name cannot be empty.")?;
        }
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(parse_yes_no(&self.ask(prompt)?))
    }

    /// Ask for an answer until the reply parses as a real number.
    pub fn read_number(&mut self) -> Result<f64> {
        loop {
            let reply = self.ask("Enter your answer: ")?;
            match parse_answer(&reply) {
                Some(value) => return Ok(value),
                None => self.say("Invalid input. Please enter a valid number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Respondent for Console<R, W> {
    fn answer(&mut self, number: usize, question: &Question) -> Result<f64> {
        self.say(&format!("\nQuestion {number}: {question}"))?;
        self.read_number()
    }
}
