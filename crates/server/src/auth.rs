//! Session-backed authentication.
//!
//! The session only stores the user's id; the user record is loaded again on
//! every request so a deleted account stops being authenticated immediately.

use crate::{error::AppError, state::AppState};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use database::{entities::users, services::user::UserService};
use log::debug;
use sha2::{Digest, Sha512};
use tera::Context;
use tower_sessions::{Session, cookie::Key};
use uuid::Uuid;

const USER_ID_KEY: &str = "user_id";
const CSRF_TOKEN_KEY: &str = "csrf_token";

pub const LOGIN_PATH: &str = "/login";

/// Derives the 64-byte cookie signing key from the configured secret
pub fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// The session of the current request and the user it is logged in as, if any
pub struct AuthSession {
    session: Session,
    user: Option<users::Model>,
}

impl AuthSession {
    pub fn current_user(&self) -> Option<&users::Model> {
        self.user.as_ref()
    }

    /// Marks the session as authenticated as `user`
    ///
    /// The session id is rotated so an id issued before login cannot be reused.
    pub async fn login(&mut self, user: users::Model) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(USER_ID_KEY, user.id).await?;
        self.user = Some(user);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.session.flush().await?;
        self.user = None;
        Ok(())
    }

    /// Returns the session's CSRF token, issuing one on first use
    pub async fn csrf_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.session.get::<String>(CSRF_TOKEN_KEY).await? {
            return Ok(token);
        }

        let token = Uuid::new_v4().to_string();
        self.session.insert(CSRF_TOKEN_KEY, &token).await?;
        Ok(token)
    }

    pub async fn verify_csrf(&self, submitted: &str) -> Result<bool, AppError> {
        let expected = self.session.get::<String>(CSRF_TOKEN_KEY).await?;
        Ok(expected.is_some_and(|token| !submitted.is_empty() && token == submitted))
    }

    /// Template context shared by every page
    pub fn page_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("current_user", &self.user);
        context
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::SessionUnavailable(message))?;

        let user = match session.get::<i32>(USER_ID_KEY).await? {
            Some(user_id) => UserService::find_by_id(&state.db, user_id).await?,
            None => None,
        };

        Ok(Self { session, user })
    }
}

/// Extractor for handlers that need a logged-in user
///
/// Anonymous requests are redirected to the login page and never reach the handler.
pub struct RequireAuth {
    pub user: users::Model,
    pub auth: AuthSession,
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth = AuthSession::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match auth.user.clone() {
            Some(user) => Ok(Self { user, auth }),
            None => {
                debug!("Anonymous request to {} redirected to login", parts.uri.path());
                Err(Redirect::to(LOGIN_PATH).into_response())
            }
        }
    }
}
