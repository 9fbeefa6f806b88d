//! In-memory object store for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use bytes::Bytes;

use super::error::StorageError;
use super::object_store::ObjectStore;

/// A stored object.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: Option<String>,
}

/// Records every call and can be told to fail.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    deleted: Mutex<Vec<(String, String)>>,
    fail_puts: AtomicBool,
    fail_puts_after: Mutex<Option<usize>>,
    puts: AtomicUsize,
    fail_deletes: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every put fails.
    pub fn fail_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    /// The first `n` puts succeed, later ones fail.
    pub fn fail_puts_after(&self, n: usize) {
        *self.fail_puts_after.lock().unwrap() = Some(n);
    }

    /// Every delete fails.
    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Buckets holding at least one object.
    pub fn buckets(&self) -> Vec<String> {
        let mut buckets: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .map(|(bucket, _)| bucket.clone())
            .collect();
        buckets.sort();
        buckets.dedup();
        buckets
    }

    /// Every delete attempt, failed ones included, in call order.
    pub fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.lock().unwrap().clone()
    }
}

impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> Result<(), StorageError> {
        let attempt = self.puts.fetch_add(1, Ordering::SeqCst);
        let over_limit = self
            .fail_puts_after
            .lock()
            .unwrap()
            .is_some_and(|n| attempt >= n);
        if self.fail_puts.load(Ordering::SeqCst) || over_limit {
            return Err(StorageError::operation("bucket unavailable"));
        }

        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data,
                content_type: content_type.map(String::from),
            },
        );
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        self.deleted
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::operation("connection refused"));
        }

        self.objects
            .lock()
            .unwrap()
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }
}
