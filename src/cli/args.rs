//! Command-line argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::menu::{ConsoleColor, MenuOptions, DEFAULT_DISPLAY_ATTRIBUTE, DEFAULT_PROMPT, MAX_INDENT};
use crate::resolver::{ResolveOptions, DEFAULT_PATH_SEPARATOR};

/// adpath - Readable OU paths from distinguished names, and a numbered console chooser
#[derive(Parser, Debug)]
#[command(name = "adpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert distinguished names into readable paths (e.g. Contoso\North\HR\User1)
    Resolve(ResolveArgs),

    /// List entries under numbered keys and print the one the operator picks
    Choose(ChooseArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Distinguished names to resolve.
    /// If none are given and no --input file is set, names are read from stdin, one per line.
    pub names: Vec<String>,

    /// File with names to resolve: one DN per line, or a JSON array of
    /// strings and directory objects when the extension is .json
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Prefix each path with the domain label
    #[arg(short = 'd', long, default_value = "false")]
    pub include_domain_name: bool,

    /// Leave the object's own name out of the path
    #[arg(short = 'x', long, default_value = "false")]
    pub exclude_object_name: bool,

    /// Upper-case the domain label (only with --include-domain-name)
    #[arg(short = 'u', long, default_value = "false")]
    pub upper_case_domain_name: bool,

    /// Separator placed between path segments
    #[arg(long, default_value = DEFAULT_PATH_SEPARATOR)]
    pub separator: String,

    /// Text printed for names that cannot be resolved (text output only).
    /// Empty by default, which makes them look like an empty path.
    #[arg(long, default_value = "")]
    pub null_text: String,

    /// Print results as a JSON array of {"input", "path"} objects
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl ResolveArgs {
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions::new()
            .include_domain_name(self.include_domain_name)
            .exclude_object_name(self.exclude_object_name)
            .upper_case_domain_name(self.upper_case_domain_name)
            .separator(self.separator.clone())
    }
}

#[derive(Args, Debug)]
pub struct ChooseArgs {
    /// Entries to list
    pub entries: Vec<String>,

    /// JSON file holding the entries. Must contain an array.
    #[arg(long, conflicts_with = "entries")]
    pub from: Option<PathBuf>,

    /// Attribute shown for structured (object) entries
    #[arg(long, default_value = DEFAULT_DISPLAY_ATTRIBUTE)]
    pub display_attribute: String,

    /// Prompt shown while waiting for a key
    #[arg(long, default_value = DEFAULT_PROMPT, value_parser = validate_prompt)]
    pub prompt: String,

    /// Line shown above the entries (omitted when empty)
    #[arg(long, default_value = "")]
    pub header: String,

    /// Indent level of the entry lines (0 to 5)
    #[arg(long, default_value = "0", value_parser = validate_indent)]
    pub indent: usize,

    /// Color of the entry lines
    #[arg(long, value_enum, default_value_t = ConsoleColor::Gray)]
    pub text_color: ConsoleColor,

    /// Color of the header line
    #[arg(long, value_enum, default_value_t = ConsoleColor::Cyan)]
    pub header_color: ConsoleColor,

    /// Append an "Exit" entry after the last one
    #[arg(long, default_value = "false")]
    pub add_exit: bool,
}

impl ChooseArgs {
    pub fn options(&self) -> MenuOptions {
        MenuOptions::new()
            .display_attribute(self.display_attribute.clone())
            .prompt(self.prompt.clone())
            .header(self.header.clone())
            .indent(self.indent)
            .text_color(self.text_color)
            .header_color(self.header_color)
            .add_exit(self.add_exit)
    }
}

/// Validator for the indent parameter
fn validate_indent(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid indent", s))?;

    if value > MAX_INDENT {
        Err(format!(
            "indent must be between 0 and {}, got {}",
            MAX_INDENT, value
        ))
    } else {
        Ok(value)
    }
}

/// Validator for the prompt parameter
fn validate_prompt(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("prompt must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
