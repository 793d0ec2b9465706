use crate::routes::{auth, course, health, order};
use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("id"))),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::homepage,
        course::course,
        course::add,
        course::delete,
        course::update,
        order::order,
        auth::register,
        auth::login,
        auth::logout
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Administrator accounts and sessions"),
        (name = "Courses", description = "Course catalog pages"),
        (name = "Orders", description = "Enrollment orders"),
    ),
    info(
        title = "Course Catalog",
        version = "1.0.0",
        description = "Server-rendered course catalog",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
