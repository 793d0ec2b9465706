use models::{course::CourseFields, credentials::Credentials, order::OrderFields};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of the add and update course forms
#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseForm {
    pub title: String,
    pub mentor: String,
    pub description: String,
}

impl From<CourseForm> for CourseFields {
    fn from(form: CourseForm) -> Self {
        CourseFields::new(form.title, form.mentor, form.description)
    }
}

/// Body of the enrollment form
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

impl From<OrderForm> for OrderFields {
    fn from(form: OrderForm) -> Self {
        OrderFields::new(&form.full_name, form.phone, form.email)
    }
}

/// Body of the register and login forms
///
/// Missing fields deserialize as empty so they surface as validation messages.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

impl CredentialsForm {
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.username, self.password)
    }
}
