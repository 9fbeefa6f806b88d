//! Podcast routes.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use podcast_core::podcast::{PodcastRequest, PodcastUpload};
use tracing::info;

use super::form::UploadForm;
use crate::{AppState, error::ApiError};

/// Creates the podcast routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/podcasts", get(list_podcasts).post(create_podcast))
        .route("/podcasts/upload", post(upload_podcast))
        .route(
            "/podcasts/{id}",
            get(get_podcast).put(update_podcast).delete(delete_podcast),
        )
}

async fn list_podcasts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let podcasts = state.podcasts.list().await?;
    Ok(Json(podcasts))
}

async fn get_podcast(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let podcast = state.podcasts.get_by_id(id).await?;
    Ok(Json(podcast))
}

async fn create_podcast(
    State(state): State<AppState>,
    Json(payload): Json<PodcastRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let podcast = state.podcasts.create(payload).await?;
    Ok((StatusCode::CREATED, Json(podcast)))
}

/// POST `/podcasts/upload`
/// Parts: `titulo`, `descricao`, a required `audio` file and an optional
/// `capa` image.
async fn upload_podcast(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form =
        UploadForm::read(multipart, &["titulo", "descricao"], &["audio", "capa"]).await?;
    let upload = PodcastUpload {
        title: form.text("titulo")?,
        description: form.text("descricao")?,
    };
    let audio = form.required_file("audio")?;

    let podcast = state
        .podcasts
        .create_with_upload(upload, audio, form.file("capa"))
        .await?;

    info!(podcast_id = podcast.id, "Podcast uploaded");
    Ok((StatusCode::CREATED, Json(podcast)))
}

async fn update_podcast(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PodcastRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let podcast = state.podcasts.update(id, payload).await?;
    Ok(Json(podcast))
}

async fn delete_podcast(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.podcasts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
