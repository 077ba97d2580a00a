//! Line-oriented console I/O
//!
//! Wraps any `BufRead` + `Write` pair so the session can be driven by stdin
//! and stdout in the binary and by in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{InventoryError, Result};
use crate::validation::InputError;

/// Prompting console over an input reader and an output writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// The line terminator is stripped; other whitespace is kept. Returns
    /// `InventoryError::InputClosed` at end of input.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt until `parse` accepts the answer, printing each rejection.
    pub fn prompt_until<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let raw = self.prompt(label)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("Rejected input {:?}: {}", raw, e);
                    self.say(e)?;
                }
            }
        }
    }
}
