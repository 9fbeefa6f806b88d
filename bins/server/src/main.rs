//! Podcast catalog API server.
//!
//! Main entry point for the news and podcast backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podcast_api::{AppState, create_router};
use podcast_core::storage::{FileStorageService, OpendalObjectStore, StorageProvider};
use podcast_db::connect;
use podcast_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let db = connect(&config.database)
        .await
        .context("failed to connect to database")?;
    info!("Connected to database");

    // Object storage
    let minio = &config.minio;
    let provider = StorageProvider::s3(
        &minio.endpoint,
        &minio.access_key,
        &minio.secret_key,
        &minio.region,
    );
    let store = OpendalObjectStore::from_provider(provider, minio.buckets.all())
        .context("failed to initialize object storage")?;
    info!(
        provider = store.provider_name(),
        endpoint = %minio.endpoint,
        public_url = %minio.public_url,
        "Object storage configured"
    );
    let storage = Arc::new(FileStorageService::new(
        Arc::new(store),
        minio.public_url.clone(),
    ));

    let state = AppState::new(Arc::new(db), storage, &minio.buckets);
    let app = create_router(state, config.server.max_upload_bytes);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
