use serde::{Deserialize, Serialize};

/// The writable part of a course listing
///
/// Fields only have to be present; empty strings are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFields {
    pub title: String,
    pub mentor: String,
    pub description: String,
}

impl CourseFields {
    pub fn new(
        title: impl Into<String>,
        mentor: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            mentor: mentor.into(),
            description: description.into(),
        }
    }
}
