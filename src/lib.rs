use std::sync::Arc;

use axum::Router;
use axum_extra::extract::cookie::Key;
use config::Config;
use repositories::SqliteRepo;
use routes::create_router;
use services::posts::PostsService;

pub use self::errors::{Error, Result};

pub mod config;
pub mod db;
pub mod errors;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod views;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub flash_key: Key,
    pub posts_service: PostsService,
}

impl AppState {
    pub fn new(config: Config, repo: SqliteRepo) -> Self {
        let flash_key = config.flash_key();

        Self {
            config,
            flash_key,
            posts_service: PostsService::new(Arc::new(repo)),
        }
    }
}

pub fn build_app(app_state: AppState) -> Router {
    create_router(Arc::new(app_state))
}
