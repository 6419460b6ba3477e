//! CLI module - argument parsing and subcommand runners

mod args;
pub mod choose;
pub mod resolve;

pub use args::*;
pub use choose::run_choose;
pub use resolve::run_resolve;
