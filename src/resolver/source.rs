//! Input shapes accepted by the path resolver.
//!
//! A caller may hand over a bare DN string or a directory object. Objects
//! are dispatched on their declared kind (`ObjectClass`) rather than on
//! whichever fields happen to be present.

use serde_json::Value;

/// Field naming the declared kind of a directory object.
pub const OBJECT_CLASS_FIELD: &str = "ObjectClass";

/// Declared kind of computer objects.
pub const COMPUTER_CLASS: &str = "computer";

/// Accessor exposed by computer objects.
pub const COMPUTER_DN_FIELD: &str = "ComputerDN";

/// Default accessor exposed by every other directory object.
pub const DISTINGUISHED_NAME_FIELD: &str = "DistinguishedName";

/// A computer object; its identifier lives behind its own accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputerObject {
    pub computer_dn: Option<String>,
}

/// Any other directory object exposing the generic DN attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryObject {
    pub distinguished_name: Option<String>,
}

/// Something that can produce a DN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnSource {
    Plain(String),
    Computer(ComputerObject),
    Directory(DirectoryObject),
    /// A value of a kind the resolver does not know how to read.
    Unsupported,
}

impl DnSource {
    /// The DN carried by this source, if its shape provides one.
    pub fn distinguished_name(&self) -> Option<&str> {
        match self {
            DnSource::Plain(dn) => Some(dn.as_str()),
            DnSource::Computer(computer) => computer.computer_dn.as_deref(),
            DnSource::Directory(object) => object.distinguished_name.as_deref(),
            DnSource::Unsupported => None,
        }
    }

    /// Classify a JSON value.
    ///
    /// Strings are plain DNs. Objects declaring `ObjectClass: computer` read
    /// `ComputerDN`; other objects read `DistinguishedName` when they carry
    /// it. Anything else is unsupported.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(dn) => DnSource::Plain(dn.clone()),
            Value::Object(map) => {
                let is_computer = map
                    .get(OBJECT_CLASS_FIELD)
                    .and_then(Value::as_str)
                    .is_some_and(|class| class.eq_ignore_ascii_case(COMPUTER_CLASS));

                if is_computer {
                    DnSource::Computer(ComputerObject {
                        computer_dn: string_field(value, COMPUTER_DN_FIELD),
                    })
                } else if map.contains_key(DISTINGUISHED_NAME_FIELD) {
                    DnSource::Directory(DirectoryObject {
                        distinguished_name: string_field(value, DISTINGUISHED_NAME_FIELD),
                    })
                } else {
                    DnSource::Unsupported
                }
            }
            _ => DnSource::Unsupported,
        }
    }

    /// Text used to identify this source in reports.
    pub fn label(&self) -> String {
        match self.distinguished_name() {
            Some(dn) => dn.to_string(),
            None => match self {
                DnSource::Computer(_) => "<computer without ComputerDN>".to_string(),
                DnSource::Directory(_) => "<object without DistinguishedName>".to_string(),
                _ => "<unsupported input>".to_string(),
            },
        }
    }
}

impl From<String> for DnSource {
    fn from(dn: String) -> Self {
        DnSource::Plain(dn)
    }
}

impl From<&str> for DnSource {
    fn from(dn: &str) -> Self {
        DnSource::Plain(dn.to_string())
    }
}

impl From<ComputerObject> for DnSource {
    fn from(computer: ComputerObject) -> Self {
        DnSource::Computer(computer)
    }
}

impl From<DirectoryObject> for DnSource {
    fn from(object: DirectoryObject) -> Self {
        DnSource::Directory(object)
    }
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}
