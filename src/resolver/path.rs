//! DN to readable path reconstruction.
//!
//! The resolver tokenizes the DN, picks which components to keep from a
//! small decision table keyed by the two inclusion flags, reverses them to
//! root-first order and joins them with the path separator.

use log::debug;

use super::dn::{DistinguishedName, Rdn};
use super::source::DnSource;
use super::ResolveError;

/// Default separator between path segments.
pub const DEFAULT_PATH_SEPARATOR: &str = "\\";

/// Flags controlling which segments appear in a resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Prefix the path with the domain label.
    pub include_domain_name: bool,
    /// Drop the leaf (object) component.
    pub exclude_object_name: bool,
    /// Upper-case the domain label instead of capitalizing it.
    /// Has no effect unless `include_domain_name` is set.
    pub upper_case_domain_name: bool,
    pub separator: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_domain_name: false,
            exclude_object_name: false,
            upper_case_domain_name: false,
            separator: DEFAULT_PATH_SEPARATOR.to_string(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_domain_name(mut self, include: bool) -> Self {
        self.include_domain_name = include;
        self
    }

    pub fn exclude_object_name(mut self, exclude: bool) -> Self {
        self.exclude_object_name = exclude;
        self
    }

    pub fn upper_case_domain_name(mut self, upper: bool) -> Self {
        self.upper_case_domain_name = upper;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Which components of a DN end up in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Object plus its containers, no domain.
    ObjectPath,
    /// Containers above the object, no domain. A top-level container yields
    /// no segments at all and therefore an empty path.
    ContainerPath,
    /// Domain, containers and object.
    FullPath,
    /// Domain plus the containers above the object. `top_level` marks an
    /// object whose immediate parent is the domain itself.
    ContainerPathWithDomain { top_level: bool },
}

impl Extraction {
    /// Pick the extraction for a DN whose components above the domain are
    /// `head` (most-specific first, never empty).
    pub fn select(head: &[Rdn], options: &ResolveOptions) -> Self {
        match (options.include_domain_name, options.exclude_object_name) {
            (false, false) => Extraction::ObjectPath,
            (false, true) => Extraction::ContainerPath,
            (true, false) => Extraction::FullPath,
            (true, true) => Extraction::ContainerPathWithDomain {
                top_level: head.len() == 1,
            },
        }
    }

    /// Segments in DN order (most-specific first).
    fn segments<'a>(&self, head: &'a [Rdn], domain: &'a [Rdn]) -> Vec<&'a str> {
        let values = |rdns: &'a [Rdn]| rdns.iter().map(|rdn| rdn.value.as_str());
        // Only the first domain component names the domain; the rest are consumed.
        let domain_label = domain.first().map(|rdn| rdn.value.as_str());

        match self {
            Extraction::ObjectPath => values(head).collect(),
            Extraction::ContainerPath => values(&head[1..]).collect(),
            Extraction::FullPath => values(head).chain(domain_label).collect(),
            Extraction::ContainerPathWithDomain { top_level: true } => {
                domain_label.into_iter().collect()
            }
            Extraction::ContainerPathWithDomain { top_level: false } => {
                values(&head[1..]).chain(domain_label).collect()
            }
        }
    }

    fn includes_domain(&self) -> bool {
        matches!(
            self,
            Extraction::FullPath | Extraction::ContainerPathWithDomain { .. }
        )
    }
}

/// Resolve a source to its readable path, reporting why it failed.
pub fn try_resolve(source: &DnSource, options: &ResolveOptions) -> Result<String, ResolveError> {
    let raw = source
        .distinguished_name()
        .ok_or(ResolveError::UnsupportedInput)?;
    resolve_str(raw, options)
}

/// Resolve a DN string to its readable path, reporting why it failed.
pub fn resolve_str(dn: &str, options: &ResolveOptions) -> Result<String, ResolveError> {
    let dn = DistinguishedName::parse(dn)?;
    let (head, domain) = dn.split_at_domain()?;

    let extraction = Extraction::select(head, options);
    let mut segments = extraction.segments(head, domain);
    segments.reverse();

    if extraction.includes_domain() {
        let (first, rest) = segments
            .split_first()
            .ok_or(ResolveError::NoDomainComponent)?;
        let label = format_domain_label(first, options.upper_case_domain_name);
        if rest.is_empty() {
            Ok(label)
        } else {
            Ok(format!(
                "{}{}{}",
                label,
                options.separator,
                rest.join(options.separator.as_str())
            ))
        }
    } else {
        Ok(segments.join(options.separator.as_str()))
    }
}

/// Resolve a source, yielding `None` when no path can be derived.
///
/// The failure reason is logged at debug level only.
pub fn resolve(source: &DnSource, options: &ResolveOptions) -> Option<String> {
    match try_resolve(source, options) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("cannot resolve {}: {}", source.label(), e);
            None
        }
    }
}

/// Resolve every source independently, preserving input order.
pub fn resolve_all<'a, I>(sources: I, options: &ResolveOptions) -> Vec<Option<String>>
where
    I: IntoIterator<Item = &'a DnSource>,
{
    sources
        .into_iter()
        .map(|source| resolve(source, options))
        .collect()
}

/// Upper-case the whole label, or capitalize it (first letter upper, rest lower).
pub fn format_domain_label(label: &str, upper_case: bool) -> String {
    if upper_case {
        return label.to_uppercase();
    }

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_of(dn: &str) -> Vec<Rdn> {
        let dn = DistinguishedName::parse(dn).unwrap();
        let (head, _) = dn.split_at_domain().unwrap();
        head.to_vec()
    }

    #[test]
    fn test_select_decision_table() {
        let nested = head_of("CN=PC1,OU=Servers,DC=contoso,DC=com");
        let base = ResolveOptions::new();

        assert_eq!(Extraction::select(&nested, &base), Extraction::ObjectPath);
        assert_eq!(
            Extraction::select(&nested, &base.clone().exclude_object_name(true)),
            Extraction::ContainerPath
        );
        assert_eq!(
            Extraction::select(&nested, &base.clone().include_domain_name(true)),
            Extraction::FullPath
        );
        assert_eq!(
            Extraction::select(
                &nested,
                &base
                    .clone()
                    .include_domain_name(true)
                    .exclude_object_name(true)
            ),
            Extraction::ContainerPathWithDomain { top_level: false }
        );
    }

    #[test]
    fn test_select_top_level_branch() {
        let top = head_of("CN=PC1,DC=contoso,DC=com");
        let options = ResolveOptions::new()
            .include_domain_name(true)
            .exclude_object_name(true);
        assert_eq!(
            Extraction::select(&top, &options),
            Extraction::ContainerPathWithDomain { top_level: true }
        );
    }

    #[test]
    fn test_format_domain_label() {
        assert_eq!(format_domain_label("contoso", false), "Contoso");
        assert_eq!(format_domain_label("CONTOSO", false), "Contoso");
        assert_eq!(format_domain_label("contoso", true), "CONTOSO");
        assert_eq!(format_domain_label("", false), "");
    }

    #[test]
    fn test_unsupported_source_is_reported() {
        let err = try_resolve(&DnSource::Unsupported, &ResolveOptions::default()).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedInput));
    }
}
