//! adpath: Directory Administration Helpers
//!
//! A library for turning distinguished names into readable OU paths and
//! for letting an operator pick one entry from a numbered console menu.

pub mod cli;
pub mod menu;
pub mod resolver;
pub mod utils;
