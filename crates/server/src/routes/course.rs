use crate::{
    auth::{AuthSession, RequireAuth},
    dtos::forms::CourseForm,
    error::AppError,
    state::AppState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use database::services::{course::CourseService, order::OrderService};
use log::info;

/// List all courses
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Course list page", content_type = "text/html", body = String)
    ),
    tag = "Courses"
)]
pub async fn homepage(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Html<String>, AppError> {
    let courses = CourseService::find_all(&state.db).await?;

    let mut context = auth.page_context();
    context.insert("courses", &courses);

    Ok(state.templates.render("homepage.html", &context)?)
}

/// Show a single course; logged-in users also see its orders
#[utoipa::path(
    get,
    path = "/course/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course detail page", content_type = "text/html", body = String),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn course(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let course = CourseService::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let orders = match auth.current_user() {
        Some(_) => OrderService::find_by_course(&state.db, id).await?,
        None => Vec::new(),
    };

    let mut context = auth.page_context();
    context.insert("course", &course);
    context.insert("orders", &orders);

    Ok(state.templates.render("course.html", &context)?)
}

pub async fn add_form(
    State(state): State<AppState>,
    RequireAuth { auth, .. }: RequireAuth,
) -> Result<Html<String>, AppError> {
    Ok(state.templates.render("add.html", &auth.page_context())?)
}

/// Create a course
#[utoipa::path(
    post,
    path = "/add",
    request_body(content = CourseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the list, or to the login page when not logged in")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Courses"
)]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth { user, .. }: RequireAuth,
    Form(form): Form<CourseForm>,
) -> Result<Redirect, AppError> {
    let course = CourseService::create(&state.db, form.into()).await?;
    info!(
        "{} added course {} ({:?})",
        user.username, course.id, course.title
    );

    Ok(Redirect::to("/"))
}

/// Delete a course and every order placed for it
#[utoipa::path(
    get,
    path = "/delete/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 303, description = "Course deleted, redirect to the list"),
        (status = 404, description = "Course not found")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Courses"
)]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth { user, .. }: RequireAuth,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    let removed_orders = CourseService::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    info!(
        "{} deleted course {id} and {removed_orders} order(s)",
        user.username
    );

    Ok(Redirect::to("/"))
}

pub async fn update_form(
    State(state): State<AppState>,
    RequireAuth { auth, .. }: RequireAuth,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let course = CourseService::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut context = auth.page_context();
    context.insert("course", &course);

    Ok(state.templates.render("update.html", &context)?)
}

/// Overwrite a course's title, mentor and description
#[utoipa::path(
    post,
    path = "/update/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body(content = CourseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Course updated, redirect to the list"),
        (status = 404, description = "Course not found")
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Courses"
)]
pub async fn update(
    State(state): State<AppState>,
    RequireAuth { user, .. }: RequireAuth,
    Path(id): Path<i32>,
    Form(form): Form<CourseForm>,
) -> Result<Redirect, AppError> {
    CourseService::update(&state.db, id, form.into())
        .await?
        .ok_or(AppError::NotFound)?;
    info!("{} updated course {id}", user.username);

    Ok(Redirect::to("/"))
}
