//! Buffered multipart form used by the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::StatusCode;
use podcast_core::catalog::CatalogError;
use podcast_core::storage::{UploadError, UploadedFile};
use tracing::debug;

use crate::error::ApiError;

/// Text and file parts of a multipart body, keyed by part name.
#[derive(Debug, Default)]
pub(crate) struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl UploadForm {
    /// Read every known part of `multipart`.
    ///
    /// Parts named in `text_fields` are read as text and parts named in
    /// `file_fields` are buffered whole. Anything else is skipped. A repeated
    /// part keeps its last value.
    pub(crate) async fn read(
        mut multipart: Multipart,
        text_fields: &[&str],
        file_fields: &[&str],
    ) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if text_fields.contains(&name.as_str()) {
                let value = field.text().await?;
                form.fields.insert(name, value);
            } else if file_fields.contains(&name.as_str()) {
                let original_filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        ApiError::from(e)
                    } else {
                        ApiError::from(CatalogError::from(UploadError::read(e.body_text())))
                    }
                })?;

                form.files.insert(
                    name,
                    UploadedFile {
                        original_filename,
                        content_type,
                        data,
                    },
                );
            } else {
                debug!(field = %name, "Ignoring unknown multipart field");
            }
        }

        Ok(form)
    }

    /// Take a required text part.
    pub(crate) fn text(&mut self, name: &str) -> Result<String, ApiError> {
        self.fields
            .remove(name)
            .ok_or_else(|| ApiError::validation(format!("missing field: {name}")))
    }

    /// Take an optional file part.
    pub(crate) fn file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Take a required file part.
    pub(crate) fn required_file(&mut self, name: &str) -> Result<UploadedFile, ApiError> {
        self.file(name)
            .ok_or_else(|| ApiError::validation(format!("missing field: {name}")))
    }
}
