use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ValidationError;

#[derive(Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Username(String);

#[derive(Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Password(String);

/// A student account's login pair, checked to be non-empty on construction.
#[derive(Debug, TypedBuilder, Serialize, Deserialize)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.into(),
            password: password.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;
    use crate::error::ValidationError;

    #[test]
    fn rejects_empty_username() {
        assert_eq!(
            Credentials::new("", "hunter2").unwrap_err(),
            ValidationError::EmptyUsername
        );
    }

    #[test]
    fn rejects_empty_password() {
        assert_eq!(
            Credentials::new("sample", "").unwrap_err(),
            ValidationError::EmptyPassword
        );
    }

    #[test]
    fn accepts_non_empty_pair() {
        let credentials = Credentials::new("sample", "text").unwrap();
        assert_eq!(AsRef::<str>::as_ref(&credentials.username), "sample");
        assert_eq!(AsRef::<str>::as_ref(&credentials.password), "text");
    }
}
