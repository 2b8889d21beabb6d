//! DTOs for domain endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::DomainUpdate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDomainRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDomainRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

impl From<UpdateDomainRequest> for DomainUpdate {
    fn from(req: UpdateDomainRequest) -> Self {
        DomainUpdate {
            name: req.name,
            description: req.description,
            enabled: req.enabled,
        }
    }
}
