//! Numbered console chooser
//!
//! Lists entries under generated keys and blocks until the operator types
//! one of them. There is no retry limit and no timeout; the only ways out
//! are a valid key, a set cancel token, or a failing console.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use serde_json::Value;

use super::entry::{MenuEntry, DEFAULT_DISPLAY_ATTRIBUTE};
use super::keys::{Choice, KeyedMenu, EXIT_LABEL};
use super::terminal::MenuConsole;
use super::{ConsoleColor, MenuError};

pub const DEFAULT_PROMPT: &str = "Pick a choice";

/// Largest accepted indent level.
pub const MAX_INDENT: usize = 5;

/// Whitespace added per indent level.
pub const INDENT_UNIT: &str = "    ";

/// Presentation settings for one chooser invocation.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub display_attribute: String,
    pub prompt: String,
    /// Suppressed when empty.
    pub header: String,
    pub indent: usize,
    pub text_color: ConsoleColor,
    pub header_color: ConsoleColor,
    pub add_exit: bool,
    /// Checked before every prompt; once set the chooser gives up.
    pub cancel_token: Option<Arc<AtomicBool>>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            display_attribute: DEFAULT_DISPLAY_ATTRIBUTE.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            header: String::new(),
            indent: 0,
            text_color: ConsoleColor::Gray,
            header_color: ConsoleColor::Cyan,
            add_exit: false,
            cancel_token: None,
        }
    }
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.display_attribute = attribute.into();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn text_color(mut self, color: ConsoleColor) -> Self {
        self.text_color = color;
        self
    }

    pub fn header_color(mut self, color: ConsoleColor) -> Self {
        self.header_color = color;
        self
    }

    pub fn add_exit(mut self, add_exit: bool) -> Self {
        self.add_exit = add_exit;
        self
    }

    pub fn cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Check every parameter before anything is written.
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.prompt.trim().is_empty() {
            return Err(MenuError::EmptyPrompt);
        }
        if self.indent > MAX_INDENT {
            return Err(MenuError::IndentOutOfRange {
                indent: self.indent,
                max: MAX_INDENT,
            });
        }
        Ok(())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token
            .as_ref()
            .is_some_and(|token| token.load(Ordering::SeqCst))
    }
}

/// Format one menu line.
pub fn render_line(indent: usize, key: &str, text: &str) -> String {
    format!("{}[{}] {}", INDENT_UNIT.repeat(indent), key, text)
}

/// List `entries`, then block until the operator picks one.
///
/// Returns the picked entry itself, or [`Choice::Exit`] for the appended
/// exit entry.
pub fn choose<T, C>(
    entries: Vec<T>,
    options: &MenuOptions,
    console: &mut C,
) -> Result<Choice<T>, MenuError>
where
    T: MenuEntry,
    C: MenuConsole + ?Sized,
{
    options.validate()?;

    let menu = KeyedMenu::build(entries, options.add_exit)?;
    if menu.is_empty() {
        return Err(MenuError::NoChoices);
    }

    display(&menu, options, console)?;

    loop {
        if options.is_cancelled() {
            debug!("menu selection cancelled");
            return Err(MenuError::Cancelled);
        }

        let input = console.read_line(&options.prompt)?;
        if let Some(position) = menu.lookup(&input) {
            debug!("operator picked key {}", menu.items()[position].key);
            return menu.into_choice(position).ok_or(MenuError::NoChoices);
        }
        trace!("no menu key matches '{}'", input.trim());
    }
}

/// Chooser over a JSON value, which must be an array.
///
/// Anything else is rejected before any output is produced.
pub fn choose_json<C>(
    entries: Value,
    options: &MenuOptions,
    console: &mut C,
) -> Result<Choice<Value>, MenuError>
where
    C: MenuConsole + ?Sized,
{
    match entries {
        Value::Array(items) => choose(items, options, console),
        _ => Err(MenuError::NotArrayLike),
    }
}

fn display<T, C>(menu: &KeyedMenu<T>, options: &MenuOptions, console: &mut C) -> Result<(), MenuError>
where
    T: MenuEntry,
    C: MenuConsole + ?Sized,
{
    if !options.header.is_empty() {
        console.write_line(&options.header, options.header_color)?;
    }

    for item in menu.items() {
        let text = match &item.target {
            Choice::Entry(entry) => entry.display_text(&options.display_attribute),
            Choice::Exit => EXIT_LABEL.to_string(),
        };
        console.write_line(
            &render_line(options.indent, &item.key, &text),
            options.text_color,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line() {
        assert_eq!(render_line(0, "1", "alpha"), "[1] alpha");
        assert_eq!(render_line(2, "07", "beta"), "        [07] beta");
    }

    #[test]
    fn test_validate_rejects_blank_prompt() {
        let options = MenuOptions::new().prompt("  ");
        assert!(matches!(options.validate(), Err(MenuError::EmptyPrompt)));
    }

    #[test]
    fn test_validate_indent_range() {
        assert!(MenuOptions::new().indent(MAX_INDENT).validate().is_ok());
        assert!(matches!(
            MenuOptions::new().indent(MAX_INDENT + 1).validate(),
            Err(MenuError::IndentOutOfRange { indent: 6, max: 5 })
        ));
    }

    #[test]
    fn test_cancel_token() {
        let token = Arc::new(AtomicBool::new(false));
        let options = MenuOptions::new().cancel_token(token.clone());
        assert!(!options.is_cancelled());
        token.store(true, Ordering::SeqCst);
        assert!(options.is_cancelled());
    }
}
