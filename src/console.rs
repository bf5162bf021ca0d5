//! Console transcript writer shared by every demo.
//!
//! Demos never call `println!` directly: they write through a [`Console`], so
//! the same code drives stdout in the binaries and an in-memory buffer in tests.

use std::fmt::Display;
use std::io::{self, StdoutLock, Write};

use colored::Colorize;

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<StdoutLock<'static>> {
    /// Colored output on a locked stdout. `colored` still honors `NO_COLOR`
    /// and drops styling when stdout is not a terminal.
    pub fn stdout() -> Self {
        Console::new(io::stdout().lock(), true)
    }
}

impl Console<Vec<u8>> {
    /// Plain-text capture for tests.
    pub fn capture() -> Self {
        Console::new(Vec::new(), false)
    }

    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.transcript().lines().map(str::to_owned).collect()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// `=== Title ===`
    pub fn heading(&mut self, title: impl Display) -> io::Result<()> {
        let text = format!("=== {title} ===");
        if self.color {
            writeln!(self.out, "{}", text.bold().cyan())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// `--- Title ---`
    pub fn subheading(&mut self, title: impl Display) -> io::Result<()> {
        let text = format!("--- {title} ---");
        if self.color {
            writeln!(self.out, "{}", text.bold())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        let text = format!("✓ {text}");
        if self.color {
            writeln!(self.out, "{}", text.green())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn failure(&mut self, text: impl Display) -> io::Result<()> {
        let text = format!("✗ {text}");
        if self.color {
            writeln!(self.out, "{}", text.red())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// `Error: <message>` for a rejected business operation.
    pub fn error(&mut self, err: impl Display) -> io::Result<()> {
        let text = format!("Error: {err}");
        if self.color {
            writeln!(self.out, "{}", text.red())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
