//! Prompted, scanf-style reading of exercise input.
//!
//! Numbers are read as whitespace separated tokens that may span several
//! lines. Whole lines can be read too; a line read picks up whatever is left
//! of the current line, or the next line when nothing meaningful is left.

use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_capacity;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: String,
    max_line_length: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, max_line_length: usize) -> Self {
        Self {
            reader,
            writer,
            pending: String::new(),
            max_line_length,
        }
    }

    pub fn prompt(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Returns false on end of input.
    fn fill(&mut self) -> Result<bool> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        self.pending = line;
        Ok(true)
    }

    pub fn next_token<T: FromStr>(&mut self, what: &str) -> Result<T> {
        loop {
            let trimmed = self.pending.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                let token = trimmed[..end].to_string();
                self.pending = trimmed[end..].to_string();
                return token.parse::<T>().map_err(|_| {
                    DrillError::invalid_input(format!("'{}' is not a valid {}", token, what))
                });
            }
            if !self.fill()? {
                return Err(DrillError::invalid_input(format!(
                    "unexpected end of input while reading {}",
                    what
                )));
            }
        }
    }

    /// First character of the line as typed, leading whitespace included.
    pub fn read_char(&mut self, what: &str) -> Result<char> {
        let line = self.read_line(what)?;
        line.chars()
            .next()
            .ok_or_else(|| DrillError::invalid_input(format!("missing {}", what)))
    }

    /// Reads the rest of the current line, or the next line, without its terminator.
    pub fn read_line(&mut self, what: &str) -> Result<String> {
        if self.pending.trim().is_empty() && !self.fill()? {
            return Err(DrillError::invalid_input(format!(
                "unexpected end of input while reading {}",
                what
            )));
        }
        let line = std::mem::take(&mut self.pending);
        let line = line.trim_end_matches(['\r', '\n']);
        // Only text lines are bounded; numbers may share one long line.
        validate_capacity("line length", line.len(), self.max_line_length)?;
        Ok(line.to_string())
    }

    /// Reads a count, checks it against `capacity`, then reads that many values.
    pub fn read_sequence(&mut self, capacity: usize) -> Result<Vec<i64>> {
        self.prompt("Enter number of elements in the array: ")?;
        let n: usize = self.next_token("element count")?;
        validate_capacity("element count", n, capacity)?;

        self.prompt("Enter elements of the array: ")?;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.next_token("integer")?);
        }
        tracing::debug!("Read sequence of {} elements", values.len());
        Ok(values)
    }
}
