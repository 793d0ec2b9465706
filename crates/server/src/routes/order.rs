use crate::{auth::AuthSession, dtos::forms::OrderForm, error::AppError, state::AppState};
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use database::services::{course::CourseService, order::OrderService};
use log::info;

pub async fn order_form(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let course = CourseService::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut context = auth.page_context();
    context.insert("course", &course);

    Ok(state.templates.render("order.html", &context)?)
}

/// Enroll in a course
#[utoipa::path(
    post,
    path = "/order/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body(content = OrderForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Order placed, redirect to the course page"),
        (status = 404, description = "Course not found")
    ),
    tag = "Orders"
)]
pub async fn order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<OrderForm>,
) -> Result<Redirect, AppError> {
    let order = OrderService::create(&state.db, id, form.into())
        .await?
        .ok_or(AppError::NotFound)?;
    info!("Order {} placed for course {id}", order.id);

    Ok(Redirect::to(&format!("/course/{id}")))
}
