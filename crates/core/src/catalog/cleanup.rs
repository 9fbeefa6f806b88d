//! Best-effort removal of stored assets.

use tracing::{debug, warn};

use crate::storage::{DeleteOutcome, FileStorageService, ObjectStore};

/// Delete the asset at `url`, logging instead of failing.
///
/// Record deletion must not depend on the object store, so any error is
/// downgraded to a warning here.
pub async fn discard_asset<S: ObjectStore>(storage: &FileStorageService<S>, url: Option<&str>) {
    match storage.delete(url).await {
        Ok(DeleteOutcome::Deleted(location)) => {
            debug!(bucket = %location.bucket, key = %location.key, "Asset deleted");
        }
        Ok(DeleteOutcome::Skipped) => {}
        Err(e) => {
            warn!(
                url = url.unwrap_or_default(),
                error = %e,
                "Failed to delete asset from storage (it may already be gone)"
            );
        }
    }
}
