use std::sync::Arc;

use axum::{response::Redirect, routing::get, Extension, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers::posts::posts_handler, services::posts::LIST_PATH, AppState, Error};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let public = ServeDir::new(&app_state.config.public_dir);

    Router::new()
        .route("/", get(|| async { Redirect::to(LIST_PATH) }))
        .nest("/posts", posts_handler())
        .nest_service("/public", public)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}

async fn not_found() -> Error {
    Error::NotFound
}
