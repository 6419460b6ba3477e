//! Display keys for menu entries.
//!
//! Keys are decimal indices starting at 1. Once the menu is long enough for
//! a key to reach two digits, every key is zero-padded to the width of the
//! largest key so the list stays aligned.

use std::collections::HashMap;

use log::debug;

use super::MenuError;

/// Label of the optional trailing exit entry.
pub const EXIT_LABEL: &str = "Exit";

/// Entry counts above this are padded when an exit entry is appended.
pub const PAD_THRESHOLD_WITH_EXIT: usize = 8;

/// Entry counts above this are padded when there is no exit entry.
pub const PAD_THRESHOLD: usize = 9;

/// How keys are formatted for one menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPolicy {
    /// Zero-pad width, or `None` when keys are plain decimals.
    width: Option<usize>,
}

impl KeyPolicy {
    pub fn new(entry_count: usize, add_exit: bool) -> Self {
        let threshold = if add_exit {
            PAD_THRESHOLD_WITH_EXIT
        } else {
            PAD_THRESHOLD
        };
        let largest_key = entry_count + usize::from(add_exit);

        let width = (entry_count > threshold).then(|| digit_count(largest_key));
        Self { width }
    }

    pub fn is_padded(&self) -> bool {
        self.width.is_some()
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Key for the 1-based `index`.
    pub fn key(&self, index: usize) -> String {
        match self.width {
            Some(width) => format!("{:0width$}", index, width = width),
            None => index.to_string(),
        }
    }

    /// Bring operator input to the same shape as generated keys, so `3` and
    /// `03` are equivalent when padding is active. Longer input is left alone.
    pub fn normalize(&self, input: &str) -> String {
        let input = input.trim();
        match self.width {
            Some(width) if input.len() < width => format!("{:0>width$}", input, width = width),
            _ => input.to_string(),
        }
    }
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// What a key leads to; also the operator's pick, handed back with its
/// original value.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice<T> {
    Entry(T),
    Exit,
}

impl<T> Choice<T> {
    pub fn into_entry(self) -> Option<T> {
        match self {
            Choice::Entry(entry) => Some(entry),
            Choice::Exit => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Choice::Exit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<T> {
    pub key: String,
    pub target: Choice<T>,
}

/// Ordered key-to-entry table for one chooser invocation.
#[derive(Debug, Clone)]
pub struct KeyedMenu<T> {
    policy: KeyPolicy,
    items: Vec<MenuItem<T>>,
    index: HashMap<String, usize>,
}

impl<T> KeyedMenu<T> {
    /// Number every entry from 1, appending the exit entry last when requested.
    pub fn build(entries: Vec<T>, add_exit: bool) -> Result<Self, MenuError> {
        let policy = KeyPolicy::new(entries.len(), add_exit);
        let mut menu = Self {
            policy,
            items: Vec::with_capacity(entries.len() + usize::from(add_exit)),
            index: HashMap::new(),
        };

        let targets = entries
            .into_iter()
            .map(Choice::Entry)
            .chain(add_exit.then_some(Choice::Exit));
        for (i, target) in targets.enumerate() {
            menu.insert(policy.key(i + 1), target)?;
        }

        debug!(
            "built menu with {} key(s), padding {:?}",
            menu.items.len(),
            policy.width()
        );
        Ok(menu)
    }

    fn insert(&mut self, key: String, target: Choice<T>) -> Result<(), MenuError> {
        if self.index.contains_key(&key) {
            return Err(MenuError::DuplicateKey(key));
        }
        self.index.insert(key.clone(), self.items.len());
        self.items.push(MenuItem { key, target });
        Ok(())
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item whose key matches the normalized `input`.
    pub fn lookup(&self, input: &str) -> Option<usize> {
        self.index.get(&self.policy.normalize(input)).copied()
    }

    /// Consume the menu, returning the value behind the item at `position`.
    pub fn into_choice(mut self, position: usize) -> Option<Choice<T>> {
        if position >= self.items.len() {
            return None;
        }
        Some(self.items.swap_remove(position).target)
    }
}
