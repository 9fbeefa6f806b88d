//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Object storage (MinIO) configuration.
    pub minio: MinioConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size, multipart uploads included.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    100 * 1024 * 1024
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// MinIO / S3-compatible object storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MinioConfig {
    /// Endpoint the S3 client talks to, e.g. `http://minio:9000`.
    pub endpoint: String,
    /// Base URL used to build public object URLs, e.g. `http://localhost:9000`.
    pub public_url: String,
    /// Access key.
    pub access_key: String,
    /// Secret key.
    pub secret_key: String,
    /// Region sent with signed requests. Any value works for self-hosted MinIO.
    #[serde(default = "default_region")]
    pub region: String,
    /// One bucket per asset category.
    #[serde(default)]
    pub buckets: BucketConfig,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Bucket names per asset category.
#[derive(Debug, Clone, Deserialize)]
pub struct BucketConfig {
    /// News article covers.
    #[serde(default = "default_news_covers")]
    pub news_covers: String,
    /// Podcast audio files.
    #[serde(default = "default_podcast_audio")]
    pub podcast_audio: String,
    /// Podcast covers.
    #[serde(default = "default_podcast_covers")]
    pub podcast_covers: String,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            news_covers: default_news_covers(),
            podcast_audio: default_podcast_audio(),
            podcast_covers: default_podcast_covers(),
        }
    }
}

impl BucketConfig {
    /// All configured bucket names.
    #[must_use]
    pub fn all(&self) -> [&str; 3] {
        [
            self.news_covers.as_str(),
            self.podcast_audio.as_str(),
            self.podcast_covers.as_str(),
        ]
    }
}

fn default_news_covers() -> String {
    "capas-noticias".to_string()
}

fn default_podcast_audio() -> String {
    "audios".to_string()
}

fn default_podcast_covers() -> String {
    "capas".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PODCAST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
