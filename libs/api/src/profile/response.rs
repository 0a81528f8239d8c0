use serde::Serialize;
use utoipa::ToSchema;

use crate::feed::response::{PaginationResponse, PostPreviewResponse};

#[derive(Serialize, ToSchema)]
pub struct GetProfileResponse {
    pub profile: ProfileResponse,
    pub posts: Vec<PostPreviewResponse>,
    pub pagination: PaginationResponse,
}

/// The account header of a profile page. `email` only appears when the
/// viewer is the owner.
#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
