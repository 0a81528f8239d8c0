use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::FieldError;

#[derive(Deserialize, ToSchema)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
}

/// A validated post submission. Referenced category/location ids still
/// have to be checked against the store.
#[derive(Debug)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    pub image: Option<String>,
}

impl PostForm {
    pub fn validate(&self) -> Result<NewPost, Vec<FieldError>> {
        let mut errors = vec![];

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FieldError::new("title", "this field is required"));
        } else if title.chars().count() > 256 {
            errors.push(FieldError::new("title", "at most 256 characters"));
        }

        let text = self.text.trim();
        if text.is_empty() {
            errors.push(FieldError::new("text", "this field is required"));
        }

        let pub_date = self.pub_date.trim();
        let pub_date = if pub_date.is_empty() {
            errors.push(FieldError::new("pub_date", "this field is required"));
            None
        } else {
            let parsed = parse_pub_date(pub_date);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "pub_date",
                    "enter a valid date/time",
                ));
            }
            parsed
        };

        let category_id = match parse_choice(&self.category) {
            Ok(category_id) => category_id,
            Err(()) => {
                errors
                    .push(FieldError::new("category", "select a valid choice"));
                None
            }
        };
        let location_id = match parse_choice(&self.location) {
            Ok(location_id) => location_id,
            Err(()) => {
                errors
                    .push(FieldError::new("location", "select a valid choice"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let image = self.image.trim();

        Ok(NewPost {
            title: title.to_string(),
            text: text.to_string(),
            pub_date: pub_date.unwrap(),
            category_id,
            location_id,
            image: (!image.is_empty()).then(|| image.to_string()),
        })
    }
}

/// Accepts the HTML `datetime-local` formats first, then full RFC 3339.
/// Naive inputs are taken as UTC.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// An unselected choice comes through as the empty string.
fn parse_choice(raw: &str) -> Result<Option<i32>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<i32>().map(Some).map_err(|_| ())
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn form(title: &str, pub_date: &str, category: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            text: "some text".to_string(),
            pub_date: pub_date.to_string(),
            category: category.to_string(),
            location: "".to_string(),
            image: "".to_string(),
        }
    }

    #[test]
    fn test_accepts_a_datetime_local_value() {
        // Arrange
        let form = form("title", "2024-05-01T12:30", "");

        // Act
        let new_post = form.validate();

        // Assert
        let new_post = new_post.unwrap();
        assert_eq!(
            new_post.pub_date,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(new_post.category_id, None);
        assert_eq!(new_post.image, None);
    }

    #[test]
    fn test_converts_an_offset_datetime_to_utc() {
        // Arrange
        let form = form("title", "2024-05-01T12:30:00+09:00", "");

        // Act
        let new_post = form.validate();

        // Assert
        assert_eq!(
            new_post.unwrap().pub_date,
            Utc.with_ymd_and_hms(2024, 5, 1, 3, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_collects_every_missing_field() {
        // Arrange
        let form = PostForm {
            title: "".to_string(),
            text: "".to_string(),
            pub_date: "".to_string(),
            category: "".to_string(),
            location: "".to_string(),
            image: "".to_string(),
        };

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        let fields: Vec<&str> =
            errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "text", "pub_date"]);
    }

    #[test]
    fn test_rejects_a_garbled_date() {
        // Arrange
        let form = form("title", "yesterday", "");

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        assert_eq!(errors[0].field, "pub_date");
        assert_eq!(errors[0].message, "enter a valid date/time");
    }

    #[test]
    fn test_rejects_a_non_numeric_choice() {
        // Arrange
        let form = form("title", "2024-05-01T12:30", "first");

        // Act
        let errors = form.validate().unwrap_err();

        // Assert
        assert_eq!(errors[0].field, "category");
    }
}
