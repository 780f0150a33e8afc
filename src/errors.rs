use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::views;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource not found")]
    NotFound,
    #[error("Post with ID {0} not found")]
    PostNotFound(String),
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Database error")]
    Store(#[source] sqlx::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    // Only routing misses and store failures are answered with this page.
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, views::error_page(status, &self.to_string())).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {:?}", err);
        Self::Store(err)
    }
}
