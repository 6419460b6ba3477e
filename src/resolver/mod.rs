//! Path resolver - turns distinguished names into readable OU paths

pub mod dn;
pub mod path;
pub mod source;

pub use dn::{DistinguishedName, Rdn, RdnKind};
pub use path::*;
pub use source::*;

use thiserror::Error;

/// Reasons a path could not be derived.
///
/// Callers of [`resolve`] only ever see `None`; the reason is kept for
/// diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("input does not expose a distinguished name")]
    UnsupportedInput,

    #[error("distinguished name is empty")]
    EmptyInput,

    #[error("no domain component (DC=) found")]
    NoDomainComponent,

    #[error("no naming component above the domain")]
    NothingAboveDomain,

    #[error("component '{component}' is not of the form type=value")]
    MalformedComponent { component: String },

    #[error("unknown attribute type '{attribute}'")]
    UnknownAttributeType { attribute: String },

    #[error("component '{component}' has an empty value")]
    EmptyValue { component: String },

    #[error("component '{component}' follows the domain components")]
    ComponentAfterDomain { component: String },
}
