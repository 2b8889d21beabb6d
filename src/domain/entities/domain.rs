//! Identity domain inputs.

/// Input for creating a Keystone domain.
///
/// New domains are enabled unless the caller says otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDomain {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
}

/// Input for updating an existing domain.
///
/// All fields are optional to support partial updates. Use `None` to leave
/// a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_domain_default() {
        let update = DomainUpdate::default();

        assert!(update.name.is_none());
        assert!(update.description.is_none());
        assert!(update.enabled.is_none());
    }
}
