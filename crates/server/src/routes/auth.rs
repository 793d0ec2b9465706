use crate::{
    auth::{AuthSession, RequireAuth},
    dtos::forms::CredentialsForm,
    error::AppError,
    state::AppState,
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use database::services::user::{Registration, UserService};
use log::{info, warn};
use models::validation::FieldError;

const CSRF_INVALID: &str = "The CSRF token is missing or invalid.";
const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// A register or login form, possibly carrying messages from a rejected submission
struct CredentialsPage<'a> {
    template: &'static str,
    username: &'a str,
    errors: Vec<FieldError>,
    form_error: Option<&'static str>,
}

impl<'a> CredentialsPage<'a> {
    fn blank(template: &'static str) -> Self {
        Self {
            template,
            username: "",
            errors: Vec::new(),
            form_error: None,
        }
    }

    async fn render(self, state: &AppState, auth: &AuthSession) -> Result<Response, AppError> {
        let mut context = auth.page_context();
        context.insert("csrf_token", &auth.csrf_token().await?);
        context.insert("username", self.username);
        context.insert("errors", &self.errors);
        context.insert("form_error", &self.form_error);

        Ok(state
            .templates
            .render(self.template, &context)?
            .into_response())
    }
}

pub async fn register_form(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Response, AppError> {
    CredentialsPage::blank("register.html")
        .render(&state, &auth)
        .await
}

/// Create an administrator account
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created, redirect to the list"),
        (status = 200, description = "Form shown again with validation messages", content_type = "text/html", body = String)
    ),
    tag = "Authentication"
)]
pub async fn register(
    State(state): State<AppState>,
    auth: AuthSession,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    if !auth.verify_csrf(&form.csrf_token).await? {
        warn!("Registration rejected: bad CSRF token");
        return CredentialsPage {
            form_error: Some(CSRF_INVALID),
            ..CredentialsPage::blank("register.html")
        }
        .render(&state, &auth)
        .await;
    }

    let credentials = form.into_credentials();

    match UserService::register(&state.db, credentials.clone()).await? {
        Registration::Created(user) => {
            info!("Registered user {}", user.username);
            Ok(Redirect::to("/").into_response())
        }
        Registration::Rejected(errors) => {
            CredentialsPage {
                template: "register.html",
                username: &credentials.username,
                errors,
                form_error: None,
            }
            .render(&state, &auth)
            .await
        }
    }
}

pub async fn login_form(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Response, AppError> {
    CredentialsPage::blank("login.html")
        .render(&state, &auth)
        .await
}

/// Log in with a username and password
///
/// An unknown username is answered exactly like a wrong password.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the list"),
        (status = 200, description = "Form shown again with an error message", content_type = "text/html", body = String)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    mut auth: AuthSession,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    if !auth.verify_csrf(&form.csrf_token).await? {
        warn!("Login rejected: bad CSRF token");
        return CredentialsPage {
            form_error: Some(CSRF_INVALID),
            ..CredentialsPage::blank("login.html")
        }
        .render(&state, &auth)
        .await;
    }

    let credentials = form.into_credentials();

    let errors = credentials.validate();
    if !errors.is_empty() {
        return CredentialsPage {
            template: "login.html",
            username: &credentials.username,
            errors,
            form_error: None,
        }
        .render(&state, &auth)
        .await;
    }

    match UserService::authenticate(&state.db, &credentials).await? {
        Some(user) => {
            info!("User {} logged in", user.username);
            auth.login(user).await?;
            Ok(Redirect::to("/").into_response())
        }
        None => {
            warn!("Failed login for {:?}", credentials.username);
            CredentialsPage {
                template: "login.html",
                username: &credentials.username,
                errors: Vec::new(),
                form_error: Some(INVALID_CREDENTIALS),
            }
            .render(&state, &auth)
            .await
        }
    }
}

/// End the current session
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Logged out, redirect to the list")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Authentication"
)]
pub async fn logout(RequireAuth { user, mut auth }: RequireAuth) -> Result<Redirect, AppError> {
    auth.logout().await?;
    info!("User {} logged out", user.username);

    Ok(Redirect::to("/"))
}
