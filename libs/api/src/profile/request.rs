use regex::Regex;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{request::Pagination, FieldError};

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct GetProfileParam {
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Deserialize, ToSchema)]
pub struct EditProfileForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// The account fields an edit may change, cleaned. Blank optional
/// fields clear the stored value.
#[derive(Debug)]
pub struct ProfileChanges {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl EditProfileForm {
    pub fn validate(&self) -> Result<ProfileChanges, Vec<FieldError>> {
        let mut errors = vec![];

        let username = self.username.trim();
        if username.is_empty() {
            errors.push(FieldError::new("username", "this field is required"));
        } else if username.chars().count() > 150 {
            errors.push(FieldError::new("username", "at most 150 characters"));
        } else if !Regex::new(r"^[\w.@+-]+$").unwrap().is_match(username) {
            errors.push(FieldError::new(
                "username",
                "letters, digits and @/./+/-/_ only",
            ));
        }

        let first_name = self.first_name.trim();
        if first_name.chars().count() > 150 {
            errors
                .push(FieldError::new("first_name", "at most 150 characters"));
        }

        let last_name = self.last_name.trim();
        if last_name.chars().count() > 150 {
            errors.push(FieldError::new("last_name", "at most 150 characters"));
        }

        let email = self.email.trim();
        if !email.is_empty()
            && (email.chars().count() > 254 || !email.contains('@'))
        {
            errors
                .push(FieldError::new("email", "enter a valid email address"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProfileChanges {
            username: username.to_string(),
            first_name: (!first_name.is_empty())
                .then(|| first_name.to_string()),
            last_name: (!last_name.is_empty()).then(|| last_name.to_string()),
            email: (!email.is_empty()).then(|| email.to_string()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn form(username: &str, email: &str) -> EditProfileForm {
        EditProfileForm {
            username: username.to_string(),
            first_name: "".to_string(),
            last_name: "".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_accepts_the_full_username_alphabet() {
        // Arrange
        let form = form("ada.lovelace+blog@example", "ada@example.com");

        // Act
        let changes = form.validate();

        // Assert
        let changes = changes.unwrap();
        assert_eq!(changes.username, "ada.lovelace+blog@example");
        assert_eq!(changes.email, Some("ada@example.com".to_string()));
        assert_eq!(changes.first_name, None);
    }

    #[test]
    fn test_rejects_a_blank_username() {
        // Arrange
        let form = form("   ", "");

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[0].message, "this field is required");
    }

    #[test]
    fn test_rejects_forbidden_username_characters() {
        // Arrange
        let form = form("ada lovelace", "");

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        assert_eq!(errors[0].field, "username");
    }

    #[test]
    fn test_rejects_an_address_without_at_sign() {
        // Arrange
        let form = form("ada", "not-an-address");

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        assert_eq!(errors[0].field, "email");
    }
}
