use std::fs;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde_json::{json, Value};
use tracing::error;
use util::workspace_dir;

use crate::{login_url, ApiError};

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, "not found".to_string())
                    .into_response()
            }
            ApiError::LoginRequired => {
                Redirect::to(login_url()).into_response()
            }
            ApiError::NotAuthor(post_id) => {
                Redirect::to(&format!("/posts/{}/", post_id)).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            let errors = fs::read_to_string(
                workspace_dir().join("libs/api/src/error-code.json"),
            )
            .unwrap();
            let parsed: Value = serde_json::from_str(&errors).unwrap();
            let errors = parsed.as_object().unwrap().clone();

            let first_char = error_code.as_bytes().first();

            match first_char {
                Some(&b'4') => ApiError::ClientError(
                    errors[error_code].as_str().unwrap().to_string(),
                ),
                _ => ApiError::ServerError(
                    errors[error_code].as_str().unwrap().to_string(),
                ),
            }
        })
    }
}
