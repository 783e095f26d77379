use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::Result;

/// Reads whitespace-separated tokens, pulling new lines only when needed.
///
/// Several answers may share one line (`A 4`) and blank lines are skipped.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
    }
}
