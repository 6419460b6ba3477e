//! Named console colors for menu output

use clap::ValueEnum;
use console::{Color, Style};

/// The sixteen classic console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// Terminal style for this color. Bright variants map to the bright
    /// ANSI palette, `Dark*` to the normal one.
    pub fn style(self) -> Style {
        let (color, bright) = match self {
            ConsoleColor::Black => (Color::Black, false),
            ConsoleColor::DarkBlue => (Color::Blue, false),
            ConsoleColor::DarkGreen => (Color::Green, false),
            ConsoleColor::DarkCyan => (Color::Cyan, false),
            ConsoleColor::DarkRed => (Color::Red, false),
            ConsoleColor::DarkMagenta => (Color::Magenta, false),
            ConsoleColor::DarkYellow => (Color::Yellow, false),
            ConsoleColor::Gray => (Color::White, false),
            ConsoleColor::DarkGray => (Color::Black, true),
            ConsoleColor::Blue => (Color::Blue, true),
            ConsoleColor::Green => (Color::Green, true),
            ConsoleColor::Cyan => (Color::Cyan, true),
            ConsoleColor::Red => (Color::Red, true),
            ConsoleColor::Magenta => (Color::Magenta, true),
            ConsoleColor::Yellow => (Color::Yellow, true),
            ConsoleColor::White => (Color::White, true),
        };

        let style = Style::new().fg(color);
        if bright {
            style.bright()
        } else {
            style
        }
    }
}
