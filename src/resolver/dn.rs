//! Tokenizer that splits a distinguished name into typed components.
//!
//! Only the small vocabulary used by directory paths is recognised:
//! `CN` (object name), `OU` (organizational unit) and `DC` (domain
//! component). Escaped delimiters inside values are not supported.

use std::fmt;

use super::ResolveError;

/// Separator between naming components in a DN.
pub const COMPONENT_DELIMITER: char = ',';

/// Separator between attribute type and value inside a component.
pub const TYPE_DELIMITER: char = '=';

/// The attribute type of a single naming component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdnKind {
    /// `CN=` - object name, also used by the built-in `Users`/`Computers` containers
    CommonName,
    /// `OU=` - organizational unit
    OrganizationalUnit,
    /// `DC=` - domain component
    DomainComponent,
}

impl RdnKind {
    /// Parse an attribute type, ignoring case and surrounding whitespace.
    pub fn parse(attribute: &str) -> Option<Self> {
        let attribute = attribute.trim();
        if attribute.eq_ignore_ascii_case("cn") {
            Some(RdnKind::CommonName)
        } else if attribute.eq_ignore_ascii_case("ou") {
            Some(RdnKind::OrganizationalUnit)
        } else if attribute.eq_ignore_ascii_case("dc") {
            Some(RdnKind::DomainComponent)
        } else {
            None
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            RdnKind::CommonName => "CN",
            RdnKind::OrganizationalUnit => "OU",
            RdnKind::DomainComponent => "DC",
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, RdnKind::DomainComponent)
    }
}

/// One `type=value` component of a DN. The value keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rdn {
    pub kind: RdnKind,
    pub value: String,
}

impl fmt::Display for Rdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), TYPE_DELIMITER, self.value)
    }
}

/// A DN split into its components, most-specific first.
///
/// Construction only checks that every component is well formed. The
/// structural rules (domain components at the tail, something above them)
/// are checked by [`DistinguishedName::split_at_domain`] so the resolver can
/// report them as distinct failure reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinguishedName {
    components: Vec<Rdn>,
}

impl DistinguishedName {
    /// Split `input` on the component delimiter and type each component.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        let components = trimmed
            .split(COMPONENT_DELIMITER)
            .map(parse_component)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    pub fn components(&self) -> &[Rdn] {
        &self.components
    }

    /// Split into the naming components above the domain and the domain
    /// components themselves, both still in DN order.
    ///
    /// Fails when there is no domain component, when nothing sits above the
    /// first domain component, or when a non-domain component follows it.
    pub fn split_at_domain(&self) -> Result<(&[Rdn], &[Rdn]), ResolveError> {
        let first_dc = self
            .components
            .iter()
            .position(|rdn| rdn.kind.is_domain())
            .ok_or(ResolveError::NoDomainComponent)?;

        if first_dc == 0 {
            return Err(ResolveError::NothingAboveDomain);
        }

        let (head, domain) = self.components.split_at(first_dc);
        if let Some(stray) = domain.iter().find(|rdn| !rdn.kind.is_domain()) {
            return Err(ResolveError::ComponentAfterDomain {
                component: stray.to_string(),
            });
        }

        Ok((head, domain))
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rdn) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", COMPONENT_DELIMITER)?;
            }
            write!(f, "{}", rdn)?;
        }
        Ok(())
    }
}

fn parse_component(raw: &str) -> Result<Rdn, ResolveError> {
    let (attribute, value) =
        raw.split_once(TYPE_DELIMITER)
            .ok_or_else(|| ResolveError::MalformedComponent {
                component: raw.to_string(),
            })?;

    let kind = RdnKind::parse(attribute).ok_or_else(|| ResolveError::UnknownAttributeType {
        attribute: attribute.trim().to_string(),
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(ResolveError::EmptyValue {
            component: raw.to_string(),
        });
    }

    Ok(Rdn {
        kind,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_casing() {
        let dn = DistinguishedName::parse("CN=User1,OU=HR,DC=contoso,DC=com").unwrap();
        let values: Vec<&str> = dn.components().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["User1", "HR", "contoso", "com"]);
        assert_eq!(dn.components()[0].kind, RdnKind::CommonName);
        assert_eq!(dn.components()[1].kind, RdnKind::OrganizationalUnit);
    }

    #[test]
    fn test_attribute_types_are_case_insensitive() {
        let dn = DistinguishedName::parse("cn=a,Ou=b,dC=c").unwrap();
        let kinds: Vec<RdnKind> = dn.components().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RdnKind::CommonName,
                RdnKind::OrganizationalUnit,
                RdnKind::DomainComponent
            ]
        );
    }

    #[test]
    fn test_whitespace_around_components_is_ignored() {
        let dn = DistinguishedName::parse(" CN=a , OU = b,DC=c ").unwrap();
        assert_eq!(dn.to_string(), "CN=a,OU=b,DC=c");
    }

    #[test]
    fn test_unknown_attribute_type() {
        let err = DistinguishedName::parse("CN=a,O=corp,DC=c").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownAttributeType { attribute } if attribute == "O"));
    }

    #[test]
    fn test_component_without_type_delimiter() {
        let err = DistinguishedName::parse("CN=a,HR,DC=c").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedComponent { .. }));
    }

    #[test]
    fn test_empty_value() {
        let err = DistinguishedName::parse("CN=,DC=c").unwrap_err();
        assert!(matches!(err, ResolveError::EmptyValue { .. }));
    }

    #[test]
    fn test_split_at_domain() {
        let dn = DistinguishedName::parse("CN=a,OU=b,DC=c,DC=d").unwrap();
        let (head, domain) = dn.split_at_domain().unwrap();
        assert_eq!(head.len(), 2);
        assert_eq!(domain.len(), 2);
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        for input in ["", "   ", "\t\r\n"] {
            assert_eq!(
                DistinguishedName::parse(input),
                Err(ResolveError::EmptyInput),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_split_requires_domain() {
        let dn = DistinguishedName::parse("CN=a,OU=b").unwrap();
        assert!(matches!(
            dn.split_at_domain(),
            Err(ResolveError::NoDomainComponent)
        ));
    }

    #[test]
    fn test_split_requires_component_above_domain() {
        let dn = DistinguishedName::parse("DC=contoso,DC=com").unwrap();
        assert!(matches!(
            dn.split_at_domain(),
            Err(ResolveError::NothingAboveDomain)
        ));
    }

    #[test]
    fn test_split_rejects_container_below_domain() {
        let dn = DistinguishedName::parse("CN=a,DC=c,OU=b").unwrap();
        assert!(matches!(
            dn.split_at_domain(),
            Err(ResolveError::ComponentAfterDomain { component }) if component == "OU=b"
        ));
    }
}
