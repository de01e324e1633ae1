// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded line reading

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Longest line accepted, excluding its terminator.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Where file contents come from. The filesystem in production, memory in tests.
pub trait LineSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Reads files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl LineSource for FsSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Why a line could not be produced.
#[derive(Debug)]
pub enum LineError {
    Io(io::Error),
    TooLong,
}

impl From<io::Error> for LineError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Iterates the lines of a reader, refusing lines over a byte limit.
///
/// `\n` and `\r\n` terminators are stripped; a trailing line without a
/// terminator is still yielded. Invalid UTF-8 is replaced, not rejected.
pub struct BoundedLines<R> {
    reader: R,
    limit: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> BoundedLines<R> {
    pub fn new(reader: R) -> Self {
        Self::with_limit(reader, MAX_LINE_BYTES)
    }

    pub fn with_limit(reader: R, limit: usize) -> Self {
        Self {
            reader,
            limit,
            buf: Vec::new(),
            done: false,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, LineError> {
        self.buf.clear();
        // Room for the line, a '\r' and the '\n'.
        let cap = self.limit as u64 + 2;
        let read = (&mut self.reader).take(cap).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        } else if read as u64 == cap {
            return Err(LineError::TooLong);
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > self.limit {
            return Err(LineError::TooLong);
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = Result<String, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
