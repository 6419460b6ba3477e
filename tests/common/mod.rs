//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use adpath::menu::{ConsoleColor, MenuConsole};
use tempfile::TempDir;

/// Console that replays scripted operator input and records every line written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub lines: Vec<(String, ConsoleColor)>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Text of every written line, without colors.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(text, _)| text.as_str()).collect()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl MenuConsole for ScriptedConsole {
    fn write_line(&mut self, text: &str, color: ConsoleColor) -> io::Result<()> {
        self.lines.push((text.to_string(), color));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// A user three OUs deep under a three-part domain
pub const NESTED_USER_DN: &str = "CN=User1,OU=HR,OU=Northwest,OU=North,DC=contoso,DC=co,DC=il";

/// A user in the built-in Users container
pub const BUILTIN_USER_DN: &str = "CN=User2,CN=Users,DC=contoso,DC=co,DC=il";

/// An OU directly under the domain
pub const TOP_LEVEL_OU_DN: &str = "OU=TopLevelOU,DC=contoso,DC=co,DC=il";

/// A computer directly under the domain
pub const TOP_LEVEL_COMPUTER_DN: &str = "CN=PC1,DC=contoso,DC=com";

/// Build a DN with `depth` nested OUs under `contoso.com`, deepest first
pub fn nested_dn(object: &str, depth: usize) -> String {
    let mut parts = vec![format!("CN={}", object)];
    for level in (1..=depth).rev() {
        parts.push(format!("OU=Level{}", level));
    }
    parts.push("DC=contoso".to_string());
    parts.push("DC=com".to_string());
    parts.join(",")
}

/// Names of `count` entries: "entry1", "entry2", ...
pub fn entry_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("entry{}", i)).collect()
}

/// Create a temporary directory with a file holding `content`
pub fn create_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
