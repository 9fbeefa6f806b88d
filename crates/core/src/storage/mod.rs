//! Storage service for podcast and news assets using Apache OpenDAL.
//!
//! Assets live in an S3-compatible store (MinIO in production, local
//! filesystem in development). Every uploaded object gets a fresh
//! UUID-based key and is addressed publicly as
//! `{public_base_url}/{bucket}/{key}`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    FileStorageService                        │
//! │   upload(file, bucket) -> url      delete(url) -> outcome    │
//! ├──────────────────────────────────────────────────────────────┤
//! │                 ObjectStore (put / delete)                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │        OpendalObjectStore: one Operator per bucket           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod object_store;
mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use config::StorageProvider;
pub use error::{StorageError, UploadError};
pub use object_store::{ObjectStore, OpendalObjectStore};
pub use service::{
    DeleteOutcome, FileStorageService, ObjectLocation, UploadedFile, generate_object_key,
    parse_object_url,
};
