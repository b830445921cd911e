//! Line sources.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock};

/// Where answers come from: one line of text per call.
///
/// A line source is read by one ask cycle at a time. [`Interviewer`]
/// enforces this by taking `&mut self` for every question.
///
/// [`Interviewer`]: crate::Interviewer
pub trait LineSource {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Lines read from any buffered reader, usually stdin.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use interview::{LineSource, ReaderLines};
///
/// let mut lines = ReaderLines::new(Cursor::new("first\r\nsecond"));
/// assert_eq!(lines.read_line().unwrap(), Some("first".to_string()));
/// assert_eq!(lines.read_line().unwrap(), Some("second".to_string()));
/// assert_eq!(lines.read_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderLines<R: BufRead> {
    reader: R,
}

impl ReaderLines<StdinLock<'static>> {
    /// Read lines from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ReaderLines<R> {
    /// Create a line source over any buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Get the underlying reader back.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// A line source that replays a fixed list of answers.
///
/// Once the answers run out it reports end of input, or the configured
/// error. Use it to drive questions deterministically in tests.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    reads: usize,
    failure: Option<io::ErrorKind>,
}

impl ScriptedLines {
    /// Create a source that yields `lines` in order.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
            failure: None,
        }
    }

    /// Create a source with no input at all.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Fail with `kind` instead of reporting end of input once the scripted
    /// lines are used up.
    pub fn then_fail(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    /// How many times `read_line` was called.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        match self.lines.pop_front() {
            Some(line) => Ok(Some(line)),
            None => match self.failure {
                Some(kind) => Err(io::Error::new(kind, "scripted input failure")),
                None => Ok(None),
            },
        }
    }
}
