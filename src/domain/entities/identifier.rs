//! Path identifiers with sentinel values.

use super::ResourceKind;

/// Identifier taken from an item path.
///
/// A few literal path values stand for a lookup rather than an id:
/// `current` for users (the caller) and `default` for roles and domains.
/// They are only sentinels for those kinds; for any other kind the same
/// string is an ordinary literal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Literal(String),
    Current,
    Default,
}

impl Identifier {
    pub const CURRENT: &'static str = "current";
    pub const DEFAULT: &'static str = "default";

    pub fn parse(kind: ResourceKind, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match (kind, raw.as_str()) {
            (ResourceKind::User, Self::CURRENT) => Identifier::Current,
            (ResourceKind::Role | ResourceKind::Domain, Self::DEFAULT) => Identifier::Default,
            _ => Identifier::Literal(raw),
        }
    }

    /// The path value this identifier was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Literal(id) => id,
            Identifier::Current => Self::CURRENT,
            Identifier::Default => Self::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_user_sentinel() {
        assert_eq!(
            Identifier::parse(ResourceKind::User, "current"),
            Identifier::Current
        );
        assert_eq!(
            Identifier::parse(ResourceKind::Role, "current"),
            Identifier::Literal("current".to_string())
        );
    }

    #[test]
    fn test_default_is_role_and_domain_sentinel() {
        assert_eq!(
            Identifier::parse(ResourceKind::Role, "default"),
            Identifier::Default
        );
        assert_eq!(
            Identifier::parse(ResourceKind::Domain, "default"),
            Identifier::Default
        );
        assert_eq!(
            Identifier::parse(ResourceKind::Project, "default"),
            Identifier::Literal("default".to_string())
        );
        assert_eq!(
            Identifier::parse(ResourceKind::User, "default"),
            Identifier::Literal("default".to_string())
        );
    }

    #[test]
    fn test_literal_round_trips() {
        let id = Identifier::parse(ResourceKind::Domain, "the_id");
        assert_eq!(id, Identifier::Literal("the_id".to_string()));
        assert_eq!(id.as_str(), "the_id");
    }

    #[test]
    fn test_sentinels_are_case_sensitive() {
        assert_eq!(
            Identifier::parse(ResourceKind::User, "Current"),
            Identifier::Literal("Current".to_string())
        );
    }
}
