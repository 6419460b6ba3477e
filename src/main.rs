//! adpath: Directory Administration CLI
//!
//! Resolves distinguished names into readable paths and offers a numbered
//! console chooser for scripts.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use adpath::cli::{run_choose, run_resolve, Cli, Commands};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Choose(args) => run_choose(args),
    }
}
