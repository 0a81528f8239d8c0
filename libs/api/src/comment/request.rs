use serde::Deserialize;
use utoipa::ToSchema;

use crate::FieldError;

#[derive(Deserialize, ToSchema)]
pub struct CommentForm {
    #[serde(default)]
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(vec![FieldError::new("text", "this field is required")]);
        }

        Ok(text.to_string())
    }
}
