//! Bulk delete dispatch shared by every collection.

use std::future::Future;

use serde_json::json;

use crate::error::AppError;

/// Deletes every id in order, one backend call each.
///
/// Every id is attempted even after a failure. When any deletion fails the
/// first failure is returned, keeping its status, with `details.failed`
/// listing each failed id and `details.deleted` counting the successes.
pub async fn delete_each<F, Fut>(kind: &str, ids: Vec<String>, mut delete: F) -> Result<(), AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    let total = ids.len();
    let mut first_error: Option<AppError> = None;
    let mut failed = Vec::new();

    for id in ids {
        match delete(id.clone()).await {
            Ok(()) => {}
            Err(err) => {
                tracing::warn!(kind, id = %id, error = %err, "Bulk delete item failed");
                failed.push(json!({ "id": id, "error": err.to_error_info() }));
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        None => {
            tracing::info!(kind, count = total, "Bulk delete completed");
            Ok(())
        }
        Some(err) => {
            let deleted = total - failed.len();
            Err(err
                .with_message(format!("Failed to delete {} of {} {}s", failed.len(), total, kind))
                .with_details(json!({ "failed": failed, "deleted": deleted })))
        }
    }
}
