//! Streaming input buffer.

use std::io::Read;

use crate::decoder::Decoder;
use crate::error::{ForgottenState, Result};

/// Parser state over a character stream.
///
/// Behaves like a randomly indexable sequence of every character the stream
/// will ever produce, addressed by absolute index. Characters are pulled from
/// the reader on demand and kept in a window until the parser declares them
/// unreachable with [`forget_before`](Self::forget_before).
///
/// `pos` is the parser's cursor. Matchers advance it and restore it on
/// failure; the buffer never moves it.
pub struct State<R> {
    pub pos: usize,
    window: Vec<char>,
    window_start: usize,
    forgotten_newlines: usize,
    /// Whether the last forgotten character was a line break.
    window_at_line_start: bool,
    decoder: Decoder<R>,
}

impl<R: Read> State<R> {
    pub fn new(reader: R) -> Self {
        Self {
            pos: 0,
            window: Vec::new(),
            window_start: 0,
            forgotten_newlines: 0,
            window_at_line_start: true,
            decoder: Decoder::new(reader),
        }
    }

    /// Character at absolute index `i`, or `None` past the end of input.
    pub fn read_at(&mut self, i: usize) -> Result<Option<char>> {
        self.check_available(i)?;
        self.fill_to(i + 1)?;
        Ok(self.window.get(i - self.window_start).copied())
    }

    /// Character under the cursor.
    pub fn peek(&mut self) -> Result<Option<char>> {
        self.read_at(self.pos)
    }

    /// Up to `n` characters starting at `i`, shorter at end of input.
    pub fn slice(&mut self, i: usize, n: usize) -> Result<&[char]> {
        self.check_available(i)?;
        self.fill_to(i.saturating_add(n))?;
        let start = (i - self.window_start).min(self.window.len());
        let end = start.saturating_add(n).min(self.window.len());
        Ok(&self.window[start..end])
    }

    pub fn substring(&mut self, i: usize, n: usize) -> Result<String> {
        Ok(self.slice(i, n)?.iter().collect())
    }

    /// Drop every character before absolute index `i`.
    ///
    /// Input up to `i` is pulled first so the forgotten newline count stays
    /// exact. If the stream ends before `i`, the window starts at the end of
    /// input instead.
    pub fn forget_before(&mut self, i: usize) -> Result<()> {
        if i <= self.window_start {
            return Ok(());
        }
        self.fill_to(i)?;
        let n = (i - self.window_start).min(self.window.len());
        let newlines = count_newlines(&self.window[..n]);
        if n > 0 {
            self.window_at_line_start = self.window[n - 1] == '\n';
        }
        self.window.drain(..n);
        self.window_start += n;
        self.forgotten_newlines += newlines;
        log::trace!(
            "forgot {n} characters ({newlines} newlines), window now starts at {}",
            self.window_start
        );
        Ok(())
    }

    /// One past the highest absolute index ever pulled from the stream.
    pub fn max_read(&self) -> usize {
        self.window_start + self.window.len()
    }

    /// Absolute index of the oldest character still buffered.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Line breaks among all forgotten characters.
    pub fn forgotten_newlines(&self) -> usize {
        self.forgotten_newlines
    }

    /// 1-based line of absolute index `i`.
    pub fn line_at(&mut self, i: usize) -> Result<usize> {
        self.check_available(i)?;
        self.fill_to(i)?;
        let end = (i - self.window_start).min(self.window.len());
        Ok(1 + self.forgotten_newlines + count_newlines(&self.window[..end]))
    }

    /// Whether the window begins a line, so no line's start is lost.
    pub(crate) fn window_at_line_start(&self) -> bool {
        self.window_at_line_start
    }

    pub(crate) fn buffered(&self) -> &[char] {
        &self.window
    }

    pub(crate) fn check_available(&self, i: usize) -> std::result::Result<(), ForgottenState> {
        if i < self.window_start {
            return Err(ForgottenState {
                requested: i,
                available: self.window_start,
                newlines: self.forgotten_newlines,
            });
        }
        Ok(())
    }

    /// Pull characters until absolute indices below `end` are buffered or
    /// the stream runs out.
    fn fill_to(&mut self, end: usize) -> Result<()> {
        while self.max_read() < end {
            match self.decoder.next_char()? {
                Some(c) => self.window.push(c),
                None => break,
            }
        }
        Ok(())
    }
}

fn count_newlines(chars: &[char]) -> usize {
    chars.iter().filter(|&&c| c == '\n').count()
}
