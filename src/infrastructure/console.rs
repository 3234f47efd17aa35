//! Console I/O boundary
//!
//! The interactive loop talks to the terminal through the [`Console`]
//! trait so session and command tests can run against a scripted double
//! instead of real stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Blocking, line-oriented console abstraction.
pub trait Console {
    /// Read one line. Returns `None` once input is exhausted (EOF).
    ///
    /// The trailing line terminator is stripped; the rest of the line is
    /// handed back verbatim, with no trimming and no case folding.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Write an indented menu or detail line.
    fn write_item(&mut self, text: &str);

    /// Write a prompt with a trailing space and no newline, flushed so it
    /// is visible before the next read blocks.
    fn write_prompt(&mut self, text: &str);
}

/// Real console over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = io::stdin().lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn write_item(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn write_prompt(&mut self, text: &str) {
        print!("{} ", text.cyan());
        io::stdout().flush().ok();
    }
}
