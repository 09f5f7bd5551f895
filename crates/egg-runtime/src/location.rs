use std::io::Read;

use crate::error::Result;
use crate::state::State;

/// Line and column of an absolute index, rebuilt from buffered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub index: usize,
    /// 1-based.
    pub line: usize,
    /// 1-based, counted from `line_start`.
    pub column: usize,
    /// Absolute index where `text` begins.
    pub line_start: usize,
    /// The line's text without its terminator, as far as it is still buffered.
    pub text: String,
    /// False when the beginning of the line was already forgotten, in which
    /// case `text` and `column` start at the window instead.
    pub complete: bool,
}

impl<R: Read> State<R> {
    /// Absolute index where the line holding `i` begins, or the window start
    /// if that line began before it. Reads no input.
    pub fn line_start(&self, i: usize) -> usize {
        let window_start = self.window_start();
        let end = i.clamp(window_start, self.max_read()) - window_start;
        match self.buffered()[..end].iter().rposition(|&c| c == '\n') {
            Some(nl) => window_start + nl + 1,
            None => window_start,
        }
    }

    /// Locate absolute index `i`.
    ///
    /// Fails with the forgotten condition when `i` precedes the window; the
    /// error's newline count still gives the line of the window start.
    pub fn locate(&mut self, i: usize) -> Result<Location> {
        self.check_available(i)?;
        // Buffers everything up to and including `i` when the input has it.
        self.read_at(i)?;

        let window_start = self.window_start();
        let line_start = self.line_start(i);
        let complete = line_start > window_start || self.window_at_line_start();

        let line = self.line_at(line_start)?;
        let mut text = String::new();
        let mut at = line_start;
        while let Some(c) = self.read_at(at)? {
            if c == '\n' {
                break;
            }
            text.push(c);
            at += 1;
        }

        Ok(Location {
            index: i,
            line,
            column: i - line_start + 1,
            line_start,
            text,
            complete,
        })
    }
}
