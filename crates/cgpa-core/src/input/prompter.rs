use std::io::{BufRead, Write};

use owo_colors::OwoColorize;

use super::TokenReader;
use crate::error::Result;

/// Interaction seam between the session and whatever drives it.
pub trait Prompter {
    /// Show a prompt and return the next answer token (`None` at end of input)
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Display a message to the user
    fn display_message(&mut self, message: &str) -> Result<()>;

    /// Display a warning message
    fn display_warning(&mut self, message: &str) -> Result<()>;
}

/// `Prompter` reading tokens from `R` and writing prompts to `W`.
pub struct ConsolePrompter<R, W> {
    tokens: TokenReader<R>,
    out: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        self.tokens.next_token()
    }

    fn display_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn display_warning(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.out, "{}", message.yellow())?;
        } else {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }
}
