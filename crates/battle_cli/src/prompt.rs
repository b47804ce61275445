use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Asks questions on `output` and answers them with whitespace-separated
/// tokens from `input`. Extra tokens on a line are kept for the next question.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                bail!("stdin closed before a nickname was entered");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
