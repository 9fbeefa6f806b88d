//! Podcast service implementation.

use std::sync::Arc;

use tracing::info;

use super::types::{NewPodcast, Podcast, PodcastRequest, PodcastResponse, PodcastUpload};
use crate::catalog::{CatalogError, EntityKind, discard_asset};
use crate::storage::{FileStorageService, ObjectStore, UploadedFile};

/// Repository trait for podcast persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait PodcastRepository: Send + Sync {
    /// List every podcast.
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Podcast>, CatalogError>> + Send;

    /// Find podcast by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Podcast>, CatalogError>> + Send;

    /// Insert a new podcast and return it with its assigned id.
    fn insert(
        &self,
        input: NewPodcast,
    ) -> impl std::future::Future<Output = Result<Podcast, CatalogError>> + Send;

    /// Overwrite every field of an existing podcast.
    fn update(
        &self,
        podcast: Podcast,
    ) -> impl std::future::Future<Output = Result<Podcast, CatalogError>> + Send;

    /// Delete podcast by ID.
    fn delete(&self, id: i64)
    -> impl std::future::Future<Output = Result<bool, CatalogError>> + Send;
}

/// Buckets podcast assets are uploaded to.
#[derive(Debug, Clone)]
pub struct PodcastBuckets {
    /// Audio files.
    pub audio: String,
    /// Cover images.
    pub cover: String,
}

impl PodcastBuckets {
    /// Create the bucket pair.
    #[must_use]
    pub fn new(audio: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            audio: audio.into(),
            cover: cover.into(),
        }
    }
}

/// Podcast service coordinating records, audio and covers.
pub struct PodcastService<R: PodcastRepository, S: ObjectStore> {
    repo: Arc<R>,
    storage: Arc<FileStorageService<S>>,
    buckets: PodcastBuckets,
}

impl<R: PodcastRepository, S: ObjectStore> PodcastService<R, S> {
    /// Create a new podcast service.
    #[must_use]
    pub fn new(
        repo: Arc<R>,
        storage: Arc<FileStorageService<S>>,
        buckets: PodcastBuckets,
    ) -> Self {
        Self {
            repo,
            storage,
            buckets,
        }
    }

    /// List all podcasts.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn list(&self) -> Result<Vec<PodcastResponse>, CatalogError> {
        let podcasts = self.repo.find_all().await?;
        Ok(podcasts.into_iter().map(PodcastResponse::from).collect())
    }

    /// Get podcast by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the podcast is not found or the database fails.
    pub async fn get_by_id(&self, id: i64) -> Result<PodcastResponse, CatalogError> {
        self.find(id).await.map(PodcastResponse::from)
    }

    /// Create a podcast from caller-supplied values, URLs included.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn create(&self, request: PodcastRequest) -> Result<PodcastResponse, CatalogError> {
        let podcast = self
            .repo
            .insert(NewPodcast {
                title: request.title,
                description: request.description,
                cover_url: request.cover_url,
                audio_url: request.audio_url,
            })
            .await?;

        info!(podcast_id = podcast.id, "Podcast created");
        Ok(podcast.into())
    }

    /// Upload the audio and the cover (if any), then create the podcast.
    ///
    /// The audio is always uploaded, even when empty. A missing or empty
    /// cover leaves `cover_url` unset. If the cover upload fails after the
    /// audio went through, the audio object stays in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if either upload fails (nothing is persisted) or the
    /// database fails.
    pub async fn create_with_upload(
        &self,
        upload: PodcastUpload,
        audio: UploadedFile,
        cover: Option<UploadedFile>,
    ) -> Result<PodcastResponse, CatalogError> {
        let audio_url = self.storage.upload(&audio, &self.buckets.audio).await?;
        let cover_url = match cover.filter(|f| !f.is_empty()) {
            Some(file) => Some(self.storage.upload(&file, &self.buckets.cover).await?),
            None => None,
        };

        let podcast = self
            .repo
            .insert(NewPodcast {
                title: upload.title,
                description: upload.description,
                cover_url,
                audio_url: Some(audio_url),
            })
            .await?;

        info!(podcast_id = podcast.id, "Podcast created with upload");
        Ok(podcast.into())
    }

    /// Overwrite title, description and both URLs.
    ///
    /// Previously referenced assets are left in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the podcast is not found or the database fails.
    pub async fn update(
        &self,
        id: i64,
        request: PodcastRequest,
    ) -> Result<PodcastResponse, CatalogError> {
        let mut podcast = self.find(id).await?;

        podcast.title = request.title;
        podcast.description = request.description;
        podcast.cover_url = request.cover_url;
        podcast.audio_url = request.audio_url;

        let updated = self.repo.update(podcast).await?;
        Ok(updated.into())
    }

    /// Delete a podcast and, best-effort, its audio and cover.
    ///
    /// # Errors
    ///
    /// Returns an error if the podcast is not found or the database fails.
    /// Storage failures never surface.
    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let podcast = self.find(id).await?;

        discard_asset(&self.storage, podcast.audio_url.as_deref()).await;
        discard_asset(&self.storage, podcast.cover_url.as_deref()).await;

        self.repo.delete(id).await?;
        info!(podcast_id = id, "Podcast deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Podcast, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Podcast, id))
    }
}
