//! News service implementation.

use std::sync::Arc;

use tracing::info;

use super::types::{NewNews, News, NewsRequest, NewsResponse, NewsUpload};
use crate::catalog::{CatalogError, EntityKind, discard_asset};
use crate::storage::{FileStorageService, ObjectStore, UploadedFile};

/// Repository trait for news persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait NewsRepository: Send + Sync {
    /// List every news article.
    fn find_all(&self) -> impl std::future::Future<Output = Result<Vec<News>, CatalogError>> + Send;

    /// Find news article by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<News>, CatalogError>> + Send;

    /// Insert a new news article and return it with its assigned id.
    fn insert(
        &self,
        input: NewNews,
    ) -> impl std::future::Future<Output = Result<News, CatalogError>> + Send;

    /// Overwrite every field of an existing news article.
    fn update(
        &self,
        news: News,
    ) -> impl std::future::Future<Output = Result<News, CatalogError>> + Send;

    /// Delete news article by ID.
    fn delete(&self, id: i64)
    -> impl std::future::Future<Output = Result<bool, CatalogError>> + Send;
}

/// News service coordinating records and cover images.
pub struct NewsService<R: NewsRepository, S: ObjectStore> {
    repo: Arc<R>,
    storage: Arc<FileStorageService<S>>,
    cover_bucket: String,
}

impl<R: NewsRepository, S: ObjectStore> NewsService<R, S> {
    /// Create a new news service.
    #[must_use]
    pub fn new(
        repo: Arc<R>,
        storage: Arc<FileStorageService<S>>,
        cover_bucket: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            storage,
            cover_bucket: cover_bucket.into(),
        }
    }

    /// List all news articles.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn list(&self) -> Result<Vec<NewsResponse>, CatalogError> {
        let news = self.repo.find_all().await?;
        Ok(news.into_iter().map(NewsResponse::from).collect())
    }

    /// Get news article by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the article is not found or the database fails.
    pub async fn get_by_id(&self, id: i64) -> Result<NewsResponse, CatalogError> {
        self.find(id).await.map(NewsResponse::from)
    }

    /// Create a news article from caller-supplied values, URLs included.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn create(&self, request: NewsRequest) -> Result<NewsResponse, CatalogError> {
        let news = self
            .repo
            .insert(NewNews {
                title: request.title,
                description: request.description,
                cover_url: request.cover_url,
            })
            .await?;

        info!(news_id = news.id, "News article created");
        Ok(news.into())
    }

    /// Upload the cover (if any) and create a news article referencing it.
    ///
    /// A missing or empty cover leaves `cover_url` unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails (nothing is persisted) or the
    /// database fails.
    pub async fn create_with_upload(
        &self,
        upload: NewsUpload,
        cover: Option<UploadedFile>,
    ) -> Result<NewsResponse, CatalogError> {
        let cover_url = match cover.filter(|f| !f.is_empty()) {
            Some(file) => Some(self.storage.upload(&file, &self.cover_bucket).await?),
            None => None,
        };

        let news = self
            .repo
            .insert(NewNews {
                title: upload.title,
                description: upload.description,
                cover_url,
            })
            .await?;

        info!(news_id = news.id, "News article created with upload");
        Ok(news.into())
    }

    /// Overwrite title, description and cover URL.
    ///
    /// The previously referenced cover is left in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the article is not found or the database fails.
    pub async fn update(&self, id: i64, request: NewsRequest) -> Result<NewsResponse, CatalogError> {
        let mut news = self.find(id).await?;

        news.title = request.title;
        news.description = request.description;
        news.cover_url = request.cover_url;

        let updated = self.repo.update(news).await?;
        Ok(updated.into())
    }

    /// Delete a news article and, best-effort, its cover.
    ///
    /// # Errors
    ///
    /// Returns an error if the article is not found or the database fails.
    /// Storage failures never surface.
    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let news = self.find(id).await?;

        discard_asset(&self.storage, news.cover_url.as_deref()).await;

        self.repo.delete(id).await?;
        info!(news_id = id, "News article deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<News, CatalogError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::News, id))
    }
}
