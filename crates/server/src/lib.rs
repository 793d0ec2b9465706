pub mod auth;
pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;

use crate::{config::Config, error::AppError, routes::health::health, state::AppState};
use axum::{Router, routing::get};
use database::session_store::SeaOrmSessionStore;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_sessions::{
    Expiry, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

/// Sessions not used for this long expire
const SESSION_IDLE_DAYS: i64 = 14;

/// Builds the application router with its session and compression layers
///
/// Sessions are stored in the application database, so they outlive the process.
pub fn app(state: AppState, config: &Config) -> Router {
    let session_layer = SessionManagerLayer::new(SeaOrmSessionStore::new(state.db.clone()))
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS)))
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_signed(auth::signing_key(&config.secret_key));

    Router::new()
        .route("/", get(routes::course::homepage))
        .route("/course/{id}", get(routes::course::course))
        .route(
            "/add",
            get(routes::course::add_form).post(routes::course::add),
        )
        .route("/delete/{id}", get(routes::course::delete))
        .route(
            "/update/{id}",
            get(routes::course::update_form).post(routes::course::update),
        )
        .route(
            "/order/{id}",
            get(routes::order::order_form).post(routes::order::order),
        )
        .route(
            "/register",
            get(routes::auth::register_form).post(routes::auth::register),
        )
        .route(
            "/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(doc::openapi))
        .fallback(|| async { AppError::NotFound })
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(session_layer),
        )
        .with_state(state)
}
