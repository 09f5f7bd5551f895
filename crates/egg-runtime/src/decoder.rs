use std::collections::VecDeque;
use std::io::{self, Read};

const CHUNK_SIZE: usize = 4096;

/// Incremental UTF-8 decoder over a byte stream.
///
/// Characters decoded past what was asked for wait in `ready`; invalid
/// sequences become U+FFFD.
pub(crate) struct Decoder<R> {
    reader: R,
    pending: Vec<u8>,
    ready: VecDeque<char>,
    eof: bool,
}

impl<R: Read> Decoder<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            ready: VecDeque::new(),
            eof: false,
        }
    }

    pub(crate) fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(c) = self.ready.pop_front() {
                return Ok(Some(c));
            }
            if self.eof {
                return Ok(None);
            }
            self.refill()?;
        }
    }

    fn refill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; CHUNK_SIZE];
        let n = loop {
            match self.reader.read(&mut chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if n == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                // truncated sequence at end of stream
                self.pending.clear();
                self.ready.push_back(char::REPLACEMENT_CHARACTER);
            }
            return Ok(());
        }

        self.pending.extend_from_slice(&chunk[..n]);
        self.decode_pending();
        Ok(())
    }

    fn decode_pending(&mut self) {
        let mut consumed = 0;
        while consumed < self.pending.len() {
            match std::str::from_utf8(&self.pending[consumed..]) {
                Ok(s) => {
                    self.ready.extend(s.chars());
                    consumed = self.pending.len();
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    if let Ok(s) = std::str::from_utf8(&self.pending[consumed..consumed + valid]) {
                        self.ready.extend(s.chars());
                    }
                    consumed += valid;
                    match e.error_len() {
                        Some(len) => {
                            self.ready.push_back(char::REPLACEMENT_CHARACTER);
                            consumed += len;
                        }
                        // incomplete sequence, wait for more bytes
                        None => break,
                    }
                }
            }
        }
        self.pending.drain(..consumed);
    }
}
