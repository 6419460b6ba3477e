//! `choose` subcommand: interactive numbered menu

use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

use super::args::ChooseArgs;
use crate::menu::{choose, choose_json, Choice, TermConsole};
use crate::utils::print_info;

/// Run the chooser and print the picked entry on stdout.
///
/// String entries are printed verbatim, structured entries as compact JSON.
/// Picking the exit entry prints nothing.
pub fn run_choose(args: &ChooseArgs) -> Result<()> {
    let options = args.options();
    let mut console = TermConsole::new();

    let choice = match &args.from {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read entries file: {}", path.display()))?;
            let entries: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse entries file: {}", path.display()))?;
            choose_json(entries, &options, &mut console)?
        }
        None => {
            let entries: Vec<Value> = args.entries.iter().cloned().map(Value::String).collect();
            choose(entries, &options, &mut console)?
        }
    };

    match choice {
        Choice::Entry(entry) => println!("{}", entry_output(&entry)),
        Choice::Exit => {
            info!("Exit entry selected");
            print_info("No entry selected");
        }
    }

    Ok(())
}

/// Text written to stdout for a picked entry.
pub fn entry_output(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
