//! Podcast types and data structures.

use serde::{Deserialize, Serialize};

/// Podcast domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Podcast {
    /// Unique identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Cover image URL.
    pub cover_url: Option<String>,
    /// Audio URL. Always set for podcasts created through an upload.
    pub audio_url: Option<String>,
}

/// Input for inserting a podcast. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPodcast {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Cover image URL.
    pub cover_url: Option<String>,
    /// Audio URL.
    pub audio_url: Option<String>,
}

/// Request body for creating or updating a podcast with explicit URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastRequest {
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Cover image URL, trusted as given.
    #[serde(rename = "capaUrl", default)]
    pub cover_url: Option<String>,
    /// Audio URL, trusted as given.
    #[serde(rename = "audioUrl", default)]
    pub audio_url: Option<String>,
}

/// Text fields sent alongside the audio and cover uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastUpload {
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Description.
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Response body for a podcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastResponse {
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
    /// Audio URL.
    #[serde(rename = "audioUrl")]
    pub audio_url: Option<String>,
}

impl From<Podcast> for PodcastResponse {
    fn from(podcast: Podcast) -> Self {
        Self {
            id: podcast.id,
            title: podcast.title,
            description: podcast.description,
            cover_url: podcast.cover_url,
            audio_url: podcast.audio_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_shape() {
        let response = PodcastResponse::from(Podcast {
            id: 1,
            title: "Ep1".into(),
            description: "desc".into(),
            cover_url: None,
            audio_url: Some("http://localhost:9000/audios/a.wav".into()),
        });
        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "titulo": "Ep1",
                "descricao": "desc",
                "capaUrl": null,
                "audioUrl": "http://localhost:9000/audios/a.wav"
            })
        );
    }
}
