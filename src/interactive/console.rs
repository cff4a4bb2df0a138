//! Line-oriented console
//!
//! Wraps an input reader and an output writer so the game loops can be driven
//! by stdin/stdout or by in-memory buffers.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Prompt-and-read console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line of input
    ///
    /// Returns the line without its line terminator, or `None` once the input
    /// is closed. Other whitespace is kept, so `" . "` is not `"."`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writer for everything that is not a prompt
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_writes_and_reads() {
        let mut console = Console::new(Cursor::new("cat\n"), Vec::new());
        let line = console.prompt("Word: ").unwrap();

        assert_eq!(line.as_deref(), Some("cat"));
        assert_eq!(console.into_output(), b"Word: ");
    }

    #[test]
    fn prompt_strips_only_line_terminator() {
        let mut console = Console::new(Cursor::new("  dog \r\n . \n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("  dog "));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(" . "));
    }

    #[test]
    fn last_line_without_newline() {
        let mut console = Console::new(Cursor::new("cat"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("cat"));
    }

    #[test]
    fn prompt_returns_none_at_eof() {
        let mut console = Console::new(Cursor::new("n\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("n"));
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_eof() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn output_is_shared_with_prompts() {
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        writeln!(console.output(), "hello").unwrap();
        console.prompt("> ").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "hello\n> ");
    }
}
