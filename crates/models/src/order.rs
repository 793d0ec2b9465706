use crate::text::title_case;
use serde::{Deserialize, Serialize};

/// Contact details submitted with an enrollment order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

impl OrderFields {
    /// Builds the order input, title-casing the applicant's name
    pub fn new(full_name: &str, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: title_case(full_name),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
