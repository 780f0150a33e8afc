use std::sync::Arc;

use axum::{
    extract::Path,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use axum_extra::extract::SignedCookieJar;
use tracing::debug;

use crate::{
    flash,
    models::posts::PostForm,
    services::posts::Outcome,
    views, AppState,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/create", get(create))
        .route("/store", post(store))
        .route("/edit/{id}", get(edit))
        .route("/update/{id}", post(update))
        .route("/delete/{id}", post(delete))
}

async fn list(Extension(app_state): Extension<Arc<AppState>>, headers: HeaderMap) -> Response {
    let outcome = app_state.posts_service.list().await;
    respond(&app_state, &headers, outcome)
}

async fn create(Extension(app_state): Extension<Arc<AppState>>, headers: HeaderMap) -> Response {
    let outcome = app_state.posts_service.create_form();
    respond(&app_state, &headers, outcome)
}

async fn store(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> Response {
    let outcome = app_state.posts_service.store(form).await;
    respond(&app_state, &headers, outcome)
}

async fn edit(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let outcome = app_state.posts_service.edit_form(&post_id).await;
    respond(&app_state, &headers, outcome)
}

async fn update(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> Response {
    let outcome = app_state.posts_service.update(&post_id, form).await;
    respond(&app_state, &headers, outcome)
}

async fn delete(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let outcome = app_state.posts_service.delete(&post_id).await;
    respond(&app_state, &headers, outcome)
}

/// Rendered pages consume the pending flash notices; redirects add to them.
fn respond(app_state: &AppState, headers: &HeaderMap, outcome: Outcome) -> Response {
    let jar = SignedCookieJar::from_headers(headers, app_state.flash_key.clone());

    match outcome {
        Outcome::Render { view, notice } => {
            let (jar, mut notices) = flash::take(jar);
            notices.extend(notice);
            debug!(view = view.name(), notices = notices.len(), "render");
            (jar, views::render(&view, &notices)).into_response()
        }
        Outcome::Redirect { to, notice } => {
            let jar = flash::push(jar, notice);
            (jar, Redirect::to(to)).into_response()
        }
    }
}
