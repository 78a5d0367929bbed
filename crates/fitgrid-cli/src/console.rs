//! Line-oriented console seam for the interactive loop.
//!
//! The game loop talks to a [`Console`] instead of stdin/stdout directly,
//! so tests can drive it with scripted input and capture what it prints.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// The interactive loop's view of the terminal.
pub trait Console {
    /// Prints one line of output.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Prints `prompt` without a trailing newline and reads one input line.
    ///
    /// Returns `None` once input is exhausted. Trailing newline characters
    /// are stripped from the returned line.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`Console`] over a buffered reader and a writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> Console for LineConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// The real terminal: locked stdin and stdout.
pub type StdConsole = LineConsole<StdinLock<'static>, StdoutLock<'static>>;

impl StdConsole {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_print_line_appends_newline() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.print_line("hello").unwrap();
        console.print_line("world").unwrap();
        assert_eq!(String::from_utf8(console.output).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn test_prompt_line_strips_line_endings() {
        let mut console = LineConsole::new(Cursor::new("42\n7\r\n"), Vec::new());
        assert_eq!(console.prompt_line("> ").unwrap().as_deref(), Some("42"));
        assert_eq!(console.prompt_line("> ").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn test_prompt_line_reports_end_of_input() {
        let mut console = LineConsole::new(Cursor::new("last"), Vec::new());
        assert_eq!(console.prompt_line("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(console.prompt_line("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.output).unwrap(), "> > ");
    }
}
