//! Line-oriented console used by the chooser
//!
//! The chooser only needs to write styled lines and read one line of
//! operator input at a time. [`TermConsole`] does that on the real
//! terminal; tests substitute a scripted implementation.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use dialoguer::Input;

use super::ConsoleColor;

/// Text sink and input source for the chooser.
pub trait MenuConsole {
    /// Write one line in the given color.
    fn write_line(&mut self, text: &str, color: ConsoleColor) -> io::Result<()>;

    /// Show `prompt` and block until the operator submits a line.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Console on stderr, leaving stdout free for the chosen value.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn is_attended(&self) -> bool {
        self.term.is_term() && io::stdin().is_terminal()
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuConsole for TermConsole {
    fn write_line(&mut self, text: &str, color: ConsoleColor) -> io::Result<()> {
        let styled = color.style().for_stderr().apply_to(text);
        self.term.write_line(&styled.to_string())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if self.is_attended() {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        }

        // Piped input: read plain lines so scripted runs work without a tty.
        self.term.write_str(&format!("{}: ", prompt))?;
        self.term.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "operator input closed before a valid choice was made",
            ));
        }
        self.term.write_line("")?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
