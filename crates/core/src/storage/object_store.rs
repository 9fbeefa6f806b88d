//! Object store client over Apache OpenDAL.

use std::collections::HashMap;
use std::future::Future;

use bytes::Bytes;
use opendal::{Operator, services};

use super::config::StorageProvider;
use super::error::StorageError;

/// Minimal object store contract the storage service needs.
///
/// Implemented by [`OpendalObjectStore`] in production and by in-memory
/// stores in tests.
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `bucket/key`.
    fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove `bucket/key`.
    fn delete(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// OpenDAL-backed object store. One operator per bucket.
#[derive(Debug, Clone)]
pub struct OpendalObjectStore {
    provider: StorageProvider,
    operators: HashMap<String, Operator>,
}

impl OpendalObjectStore {
    /// Create a store with operators prebuilt for `buckets`.
    ///
    /// Buckets outside that list still work; their operator is built per call.
    ///
    /// # Errors
    ///
    /// Returns an error if an operator cannot be initialized.
    pub fn from_provider<I, B>(provider: StorageProvider, buckets: I) -> Result<Self, StorageError>
    where
        I: IntoIterator<Item = B>,
        B: Into<String>,
    {
        let mut operators = HashMap::new();
        for bucket in buckets {
            let bucket = bucket.into();
            let operator = create_operator(&provider, &bucket)?;
            operators.insert(bucket, operator);
        }
        Ok(Self {
            provider,
            operators,
        })
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    fn operator(&self, bucket: &str) -> Result<Operator, StorageError> {
        match self.operators.get(bucket) {
            Some(operator) => Ok(operator.clone()),
            None => create_operator(&self.provider, bucket),
        }
    }
}

impl ObjectStore for OpendalObjectStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> Result<(), StorageError> {
        let operator = self.operator(bucket)?;
        let mut write = operator.write_with(key, data);
        // Backends without content-type support (local fs) reject the option.
        if let Some(content_type) = content_type
            && operator.info().full_capability().write_with_content_type
        {
            write = write.content_type(content_type);
        }
        write.await?;
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let operator = self.operator(bucket)?;
        operator.delete(key).await.map_err(StorageError::from)
    }
}

/// Create OpenDAL operator for one bucket.
fn create_operator(provider: &StorageProvider, bucket: &str) -> Result<Operator, StorageError> {
    match provider {
        StorageProvider::S3 {
            endpoint,
            access_key_id,
            secret_access_key,
            region,
        } => {
            // Path-style addressing is OpenDAL's default, which MinIO needs.
            let builder = services::S3::default()
                .endpoint(endpoint)
                .bucket(bucket)
                .access_key_id(access_key_id)
                .secret_access_key(secret_access_key)
                .region(region)
                .disable_config_load();

            Ok(Operator::new(builder)
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish())
        }
        StorageProvider::LocalFs { root } => {
            let dir = root.join(bucket);
            let builder = services::Fs::default().root(
                dir.to_str()
                    .ok_or_else(|| StorageError::configuration("invalid path"))?,
            );

            Ok(Operator::new(builder)
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_fs_put_and_delete() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = OpendalObjectStore::from_provider(
            StorageProvider::local_fs(dir.path()),
            ["audios"],
        )
        .expect("should create store");

        store
            .put(
                "audios",
                "ep1.mp3",
                Some("audio/mpeg"),
                Bytes::from_static(b"ID3"),
            )
            .await
            .expect("put should succeed");

        let path = dir.path().join("audios").join("ep1.mp3");
        assert_eq!(std::fs::read(&path).expect("object on disk"), b"ID3");

        store
            .delete("audios", "ep1.mp3")
            .await
            .expect("delete should succeed");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unconfigured_bucket_is_built_on_demand() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store =
            OpendalObjectStore::from_provider(StorageProvider::local_fs(dir.path()), [] as [&str; 0])
                .expect("should create store");

        store
            .put("capas", "c.png", None, Bytes::from_static(b"png"))
            .await
            .expect("put should succeed");

        assert!(dir.path().join("capas").join("c.png").exists());
        assert_eq!(store.provider_name(), "local");
    }
}
