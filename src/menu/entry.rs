//! Display text for menu entries

use serde_json::Value;

/// Default attribute read from structured entries.
pub const DEFAULT_DISPLAY_ATTRIBUTE: &str = "Name";

/// A value that can be listed in the chooser.
///
/// The chooser only ever reads the display text; the value itself is handed
/// back untouched when picked.
pub trait MenuEntry {
    /// Text shown for this entry. Plain strings show themselves; structured
    /// values show `attribute` when they carry it, otherwise their default
    /// text form.
    fn display_text(&self, attribute: &str) -> String;
}

impl MenuEntry for String {
    fn display_text(&self, _attribute: &str) -> String {
        self.clone()
    }
}

impl MenuEntry for &str {
    fn display_text(&self, _attribute: &str) -> String {
        (*self).to_string()
    }
}

impl MenuEntry for Value {
    fn display_text(&self, attribute: &str) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Object(map) => match map.get(attribute) {
                Some(field) => scalar_text(field),
                None => self.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Strings without their JSON quotes, everything else as JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
