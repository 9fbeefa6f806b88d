//! API route definitions.

use axum::Router;

use crate::AppState;

mod form;
pub mod health;
pub mod news;
pub mod podcasts;


/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(news::routes())
        .merge(podcasts::routes())
}
