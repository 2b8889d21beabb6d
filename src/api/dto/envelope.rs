//! Collection response envelope.

use serde::Serialize;

/// `{"has_more": bool?, "items": [...]}`.
///
/// `has_more` is only emitted for paginated collections.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            has_more: None,
            items,
        }
    }

    pub fn paged(items: Vec<T>, has_more: bool) -> Self {
        Self {
            has_more: Some(has_more),
            items,
        }
    }
}
