//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for news articles and podcasts
//! - Multipart upload handling
//! - Error to HTTP response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use podcast_core::news::NewsService;
use podcast_core::podcast::{PodcastBuckets, PodcastService};
use podcast_core::storage::{FileStorageService, OpendalObjectStore};
use podcast_db::{NewsArticleRepository, PodcastRepository};
use podcast_shared::BucketConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// News service over the database and object store.
pub type NewsCatalog = NewsService<NewsArticleRepository, OpendalObjectStore>;

/// Podcast service over the database and object store.
pub type PodcastCatalog = PodcastService<PodcastRepository, OpendalObjectStore>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// News article service.
    pub news: Arc<NewsCatalog>,
    /// Podcast service.
    pub podcasts: Arc<PodcastCatalog>,
}

impl AppState {
    /// Wire both services to one connection pool and one storage service.
    #[must_use]
    pub fn new(
        db: Arc<DatabaseConnection>,
        storage: Arc<FileStorageService<OpendalObjectStore>>,
        buckets: &BucketConfig,
    ) -> Self {
        let news = NewsService::new(
            Arc::new(NewsArticleRepository::new(db.clone())),
            storage.clone(),
            buckets.news_covers.clone(),
        );
        let podcasts = PodcastService::new(
            Arc::new(PodcastRepository::new(db)),
            storage,
            PodcastBuckets::new(
                buckets.podcast_audio.clone(),
                buckets.podcast_covers.clone(),
            ),
        );

        Self {
            news: Arc::new(news),
            podcasts: Arc::new(podcasts),
        }
    }
}

/// Creates the main application router.
///
/// `max_body_bytes` caps every request body, multipart uploads included.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
