//! Pass-through representation of a Keystone object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The resource types exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Role,
    Domain,
    Project,
}

impl ResourceKind {
    /// Collection segment used in API paths (`/api/keystone/<plural>`).
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Role => "roles",
            ResourceKind::Domain => "domains",
            ResourceKind::Project => "projects",
        }
    }

    /// Name used in log lines and error messages.
    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Role => "role",
            ResourceKind::Domain => "domain",
            ResourceKind::Project => "project",
        }
    }
}

/// A backend object as a field mapping.
///
/// The gateway never owns these objects: whatever Keystone returned is kept
/// verbatim and serialized back without an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    fields: Map<String, Value>,
}

impl Resource {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Backend-assigned identifier, if the object carries one.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Resource {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: Value) -> Resource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_id_is_read_from_fields() {
        let r = resource(json!({ "id": "user123", "name": "bob" }));
        assert_eq!(r.id(), Some("user123"));
    }

    #[test]
    fn test_missing_or_non_string_id() {
        assert_eq!(resource(json!({ "name": "bob" })).id(), None);
        assert_eq!(resource(json!({ "id": 5 })).id(), None);
    }

    #[test]
    fn test_serializes_as_bare_object() {
        let r = resource(json!({ "name": "Ni!" }));
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"name":"Ni!"}"#);
    }

    #[test]
    fn test_plural_segments() {
        assert_eq!(ResourceKind::User.plural(), "users");
        assert_eq!(ResourceKind::Project.plural(), "projects");
    }
}
