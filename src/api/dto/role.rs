//! DTOs for role endpoints.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// Query parameters for `GET /api/keystone/roles`.
#[derive(Debug, Default, Deserialize)]
pub struct RoleListQuery {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

/// Optional body of a role grant.
///
/// Ids always come from the path; `data` is accepted but never read.
#[derive(Debug, Default, Deserialize)]
pub struct GrantRoleRequest {
    pub action: Option<String>,
    pub data: Option<Value>,
}

impl GrantRoleRequest {
    pub const GRANT: &'static str = "grant";

    pub fn is_grant(&self) -> bool {
        self.action.as_deref().is_none_or(|a| a == Self::GRANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grant_action() {
        let absent: GrantRoleRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.is_grant());

        let grant: GrantRoleRequest =
            serde_json::from_value(json!({ "action": "grant", "data": { "user_id": "x" } }))
                .unwrap();
        assert!(grant.is_grant());

        let revoke: GrantRoleRequest =
            serde_json::from_value(json!({ "action": "revoke" })).unwrap();
        assert!(!revoke.is_grant());
    }
}
