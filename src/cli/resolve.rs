//! `resolve` subcommand: batch DN to path conversion

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use console::Term;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use super::args::ResolveArgs;
use crate::resolver::{resolve, DnSource};
use crate::utils::{create_progress_bar, finish_with_success, print_resolve_summary};

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub input: String,
    pub path: Option<String>,
}

/// Run the resolve subcommand, printing one result per input in input order.
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let from_file = args.names.is_empty() && args.input.is_some();
    let sources = collect_sources(args)?;
    let options = args.options();
    info!("Resolving {} name(s)", sources.len());

    let pb = if from_file {
        Some(create_progress_bar(sources.len() as u64, "Resolving"))
    } else {
        None
    };

    let mut resolutions = Vec::with_capacity(sources.len());
    for source in &sources {
        resolutions.push(Resolution {
            input: source.label(),
            path: resolve(source, &options),
        });
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = &pb {
        finish_with_success(pb, "Resolution complete");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
    } else {
        for resolution in &resolutions {
            if resolution.path.is_none() {
                warn!("Could not resolve: {}", resolution.input);
            }
            println!(
                "{}",
                resolution.path.as_deref().unwrap_or(args.null_text.as_str())
            );
        }
    }

    if Term::stderr().is_term() {
        let resolved = resolutions.iter().filter(|r| r.path.is_some()).count();
        print_resolve_summary(resolved, resolutions.len());
    }

    Ok(())
}

fn collect_sources(args: &ResolveArgs) -> Result<Vec<DnSource>> {
    if !args.names.is_empty() {
        return Ok(args.names.iter().map(|n| DnSource::from(n.as_str())).collect());
    }

    match &args.input {
        Some(path) => load_sources(path),
        None => {
            let mut content = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut content)
                .context("Failed to read names from stdin")?;
            Ok(parse_lines(&content))
        }
    }
}

/// Load sources from a text file (one DN per line) or a `.json` file.
pub fn load_sources(path: &Path) -> Result<Vec<DnSource>> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let value: Value = serde_json::from_slice(&content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
        Ok(parse_json(&value))
    } else {
        Ok(parse_lines(&content))
    }
}

/// Each array element becomes one source; any other value is a single source.
pub fn parse_json(value: &Value) -> Vec<DnSource> {
    match value {
        Value::Array(items) => items.iter().map(DnSource::from_json).collect(),
        other => vec![DnSource::from_json(other)],
    }
}

/// Non-blank lines, each a plain DN.
///
/// Lines are decoded one at a time; a line that is not valid UTF-8 becomes
/// an unsupported source so the rest of the batch still resolves.
pub fn parse_lines(content: &[u8]) -> Vec<DnSource> {
    content
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(i, raw)| match std::str::from_utf8(raw) {
            Ok(line) => {
                let line = line.trim();
                (!line.is_empty()).then(|| DnSource::from(line))
            }
            Err(e) => {
                warn!("Line {} is not valid UTF-8: {}", i + 1, e);
                Some(DnSource::Unsupported)
            }
        })
        .collect()
}
