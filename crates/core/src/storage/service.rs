//! File storage service: object naming, upload and asset cleanup.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info};
use uuid::Uuid;

use super::error::{StorageError, UploadError};
use super::object_store::ObjectStore;

/// A fully buffered file received from a client.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    /// Filename as sent by the client.
    pub original_filename: Option<String>,
    /// Content type as sent by the client.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Bytes,
}

impl UploadedFile {
    /// Create a file from its contents.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            original_filename: None,
            content_type: None,
            data: data.into(),
        }
    }

    /// Set the original filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.original_filename = Some(filename.into());
        self
    }

    /// Set the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// True when the file has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Bucket and key addressed by an object URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    /// Bucket name.
    pub bucket: String,
    /// Object key within the bucket.
    pub key: String,
}

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No URL was given; the store was not contacted.
    Skipped,
    /// The store accepted the delete.
    Deleted(ObjectLocation),
}

/// Storage service for podcast and news assets.
pub struct FileStorageService<S: ObjectStore> {
    store: Arc<S>,
    public_base_url: String,
}

impl<S: ObjectStore> FileStorageService<S> {
    /// Create a new storage service issuing URLs under `public_base_url`.
    #[must_use]
    pub fn new(store: Arc<S>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into(),
        }
    }

    /// Upload `file` to `bucket` under a fresh key and return its public URL.
    ///
    /// The whole payload is sent in one write. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Store`] if the object store rejects the write.
    pub async fn upload(&self, file: &UploadedFile, bucket: &str) -> Result<String, UploadError> {
        let key = generate_object_key(file.original_filename.as_deref());

        if let Err(e) = self
            .store
            .put(bucket, &key, file.content_type.as_deref(), file.data.clone())
            .await
        {
            error!(bucket = %bucket, key = %key, error = %e, "Upload to object storage failed");
            return Err(UploadError::Store(e));
        }

        info!(
            bucket = %bucket,
            key = %key,
            size = file.data.len(),
            "Object uploaded"
        );

        Ok(self.object_url(bucket, &key))
    }

    /// Delete the object addressed by `file_url`.
    ///
    /// A missing or blank URL is skipped without contacting the store.
    /// Failures are returned; callers that treat cleanup as best-effort
    /// discard and log them.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the store rejects the
    /// delete.
    pub async fn delete(&self, file_url: Option<&str>) -> Result<DeleteOutcome, StorageError> {
        let Some(url) = file_url.filter(|u| !u.trim().is_empty()) else {
            return Ok(DeleteOutcome::Skipped);
        };

        let location = parse_object_url(url)?;
        self.store.delete(&location.bucket, &location.key).await?;

        Ok(DeleteOutcome::Deleted(location))
    }

    /// Build the public URL for `bucket/key`.
    #[must_use]
    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, bucket, key)
    }
}

/// Generate a unique object key, keeping the original extension.
///
/// Format: `{uuid}{extension}` where the extension is everything from the
/// last `.` of the original filename, dot included.
#[must_use]
pub fn generate_object_key(original_filename: Option<&str>) -> String {
    let extension = original_filename
        .and_then(|name| name.rfind('.').map(|idx| &name[idx..]))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), extension)
}

/// Recover bucket and key from an object URL.
///
/// The URL is split on `/` with trailing empty segments dropped; the last
/// two segments are the bucket and the key.
///
/// # Errors
///
/// Returns [`StorageError::InvalidUrl`] if fewer than two segments remain or
/// either of them is empty.
pub fn parse_object_url(url: &str) -> Result<ObjectLocation, StorageError> {
    let mut segments: Vec<&str> = url.split('/').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    match segments.as_slice() {
        [.., bucket, key] if !bucket.is_empty() && !key.is_empty() => Ok(ObjectLocation {
            bucket: (*bucket).to_string(),
            key: (*key).to_string(),
        }),
        _ => Err(StorageError::invalid_url(url)),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Extension from the last dot onward is preserved.
    proptest! {
        #[test]
        fn prop_key_preserves_last_extension(
            stem in "[a-zA-Z0-9_.-]{0,30}",
            ext in "[a-z0-9]{0,5}",
        ) {
            let filename = format!("{stem}.{ext}");
            let key = generate_object_key(Some(&filename));
            let expected = format!(".{ext}");
            prop_assert!(key.ends_with(&expected));
            prop_assert_eq!(key.len(), 36 + expected.len());
        }
    }

    // Filenames without a dot produce a bare UUID.
    proptest! {
        #[test]
        fn prop_key_without_dot_is_bare_uuid(filename in "[a-zA-Z0-9_ -]{0,40}") {
            let key = generate_object_key(Some(&filename));
            prop_assert!(Uuid::parse_str(&key).is_ok());
        }
    }

    // Keys never repeat within a run.
    proptest! {
        #[test]
        fn prop_keys_pairwise_distinct(count in 2usize..200) {
            let keys: HashSet<String> = (0..count)
                .map(|_| generate_object_key(Some("same.mp3")))
                .collect();
            prop_assert_eq!(keys.len(), count);
        }
    }

    // Every issued URL parses back to its bucket and key.
    proptest! {
        #[test]
        fn prop_issued_url_parses_back(
            bucket in "[a-z][a-z0-9-]{2,20}",
            ext in "(\\.[a-z0-9]{1,4})?",
        ) {
            let key = generate_object_key(Some(&format!("file{ext}")));
            let url = format!("http://localhost:9000/{bucket}/{key}");
            let location = parse_object_url(&url).expect("issued url parses");
            prop_assert_eq!(location.bucket, bucket);
            prop_assert_eq!(location.key, key);
        }
    }
}
