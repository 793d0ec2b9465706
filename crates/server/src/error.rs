use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

const NOT_FOUND_PAGE: &str = include_str!("../templates/not_found.html");

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The session layer is missing from the router
    #[error("Session unavailable: {0}")]
    SessionUnavailable(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            err => {
                error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
