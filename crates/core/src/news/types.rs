//! News types and data structures.

use serde::{Deserialize, Serialize};

/// News article domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    /// Unique identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Cover image URL.
    pub cover_url: Option<String>,
}

/// Input for inserting a news article. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Cover image URL.
    pub cover_url: Option<String>,
}

/// Request body for creating or updating a news article with explicit URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Cover image URL, trusted as given.
    #[serde(rename = "capaUrl", default)]
    pub cover_url: Option<String>,
}

/// Text fields sent alongside a cover upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsUpload {
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Response body for a news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResponse {
    /// Identifier.
    pub id: i64,
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Cover image URL.
    #[serde(rename = "capaUrl")]
    pub cover_url: Option<String>,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            title: news.title,
            description: news.description,
            cover_url: news.cover_url,
        }
    }
}
