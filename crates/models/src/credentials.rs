use crate::validation::{FieldError, check_length};
use serde::Deserialize;

pub const CREDENTIAL_MIN_LEN: usize = 4;
pub const CREDENTIAL_MAX_LEN: usize = 20;

/// Username and password as submitted on the register and login forms
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks presence and length of both fields
    ///
    /// Whether the username is free, or the password matches, is decided by the
    /// user service since it needs the database.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            check_length(
                "username",
                &self.username,
                CREDENTIAL_MIN_LEN,
                CREDENTIAL_MAX_LEN,
            ),
            check_length(
                "password",
                &self.password,
                CREDENTIAL_MIN_LEN,
                CREDENTIAL_MAX_LEN,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod test {
    use super::Credentials;

    fn fields(errors: &[crate::validation::FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_boundaries_accepted() {
        assert!(Credentials::new("abcd", "wxyz").validate().is_empty());
        assert!(
            Credentials::new("a".repeat(20), "b".repeat(20))
                .validate()
                .is_empty()
        );
    }

    #[test]
    fn test_short_values_rejected() {
        assert_eq!(
            fields(&Credentials::new("abc", "valid").validate()),
            ["username"]
        );
        assert_eq!(
            fields(&Credentials::new("valid", "abc").validate()),
            ["password"]
        );
    }

    #[test]
    fn test_long_values_rejected() {
        assert_eq!(
            fields(&Credentials::new("a".repeat(21), "valid").validate()),
            ["username"]
        );
        assert_eq!(
            fields(&Credentials::new("valid", "b".repeat(21)).validate()),
            ["password"]
        );
    }

    #[test]
    fn test_both_fields_reported() {
        let errors = Credentials::new("", "").validate();
        assert_eq!(fields(&errors), ["username", "password"]);
        assert!(errors.iter().all(|e| e.message == "This field is required."));
    }
}
