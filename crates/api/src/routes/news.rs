//! News article routes.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use podcast_core::news::{NewsRequest, NewsUpload};
use tracing::info;

use super::form::UploadForm;
use crate::{AppState, error::ApiError};

/// Creates the news article routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/noticias", get(list_news).post(create_news))
        .route("/noticias/upload", post(upload_news))
        .route(
            "/noticias/{id}",
            get(get_news).put(update_news).delete(delete_news),
        )
}

/// GET `/noticias`
async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let news = state.news.list().await?;
    Ok(Json(news))
}

/// GET `/noticias/{id}`
async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let news = state.news.get_by_id(id).await?;
    Ok(Json(news))
}

/// POST `/noticias`
/// Create a news article with caller-supplied URLs.
async fn create_news(
    State(state): State<AppState>,
    Json(payload): Json<NewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let news = state.news.create(payload).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// POST `/noticias/upload`
/// Parts: `titulo`, `descricao` and an optional `capa` image.
async fn upload_news(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = UploadForm::read(multipart, &["titulo", "descricao"], &["capa"]).await?;
    let upload = NewsUpload {
        title: form.text("titulo")?,
        description: form.text("descricao")?,
    };

    let news = state
        .news
        .create_with_upload(upload, form.file("capa"))
        .await?;

    info!(news_id = news.id, has_cover = news.cover_url.is_some(), "News uploaded");
    Ok((StatusCode::CREATED, Json(news)))
}

/// PUT `/noticias/{id}`
async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let news = state.news.update(id, payload).await?;
    Ok(Json(news))
}

/// DELETE `/noticias/{id}`
async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.news.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
