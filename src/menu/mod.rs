//! Menu chooser - numbered console selection of arbitrary entries

pub mod chooser;
pub mod color;
pub mod entry;
pub mod keys;
pub mod terminal;

pub use chooser::*;
pub use color::ConsoleColor;
pub use entry::{MenuEntry, DEFAULT_DISPLAY_ATTRIBUTE};
pub use keys::{Choice, KeyPolicy, KeyedMenu, MenuItem, EXIT_LABEL};
pub use terminal::{MenuConsole, TermConsole};

use std::io;

use thiserror::Error;

/// Errors raised by the chooser.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Entries must be an array-like collection")]
    NotArrayLike,

    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("indent {indent} is out of range (0-{max})")]
    IndentOutOfRange { indent: usize, max: usize },

    #[error("menu has no entries to choose from")]
    NoChoices,

    #[error("duplicate menu key '{0}'")]
    DuplicateKey(String),

    #[error("menu selection was cancelled")]
    Cancelled,

    #[error("console error: {0}")]
    Console(#[from] io::Error),
}
