//! Line-oriented console I/O.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// The text interface the creation dialogue talks through.
pub trait Console {
    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Write `text` with no newline, e.g. a prompt awaiting input.
    fn write(&mut self, text: &str);

    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Option<String>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text);
    }

    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }
}

/// A console on the process's stdin and stdout.
pub struct StdConsole {
    input: StdinLock<'static>,
    output: Stdout,
}

impl StdConsole {
    /// Lock stdin and attach to stdout.
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write to stdout");
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, text: &str) {
        self.emit(&format!("{text}\n"));
    }

    fn write(&mut self, text: &str) {
        self.emit(text);
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => None, // EOF
            Ok(_) => Some(decode_line(&buf)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin, treating as end of input");
                None
            }
        }
    }
}

/// A console fed from a fixed script that records everything written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of scripted lines not yet read.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, text: &str) {
        self.transcript.push_str(text);
        self.transcript.push('\n');
    }

    fn write(&mut self, text: &str) {
        self.transcript.push_str(text);
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

/// Decode a raw line, replacing invalid UTF-8 with U+FFFD.
fn decode_line(buf: &[u8]) -> String {
    strip_line_ending(String::from_utf8_lossy(buf).into_owned())
}

/// Remove a trailing `\n` or `\r\n`, leaving everything else intact.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
