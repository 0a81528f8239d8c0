use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::feed::response::{PaginationResponse, PostPreviewResponse};

#[derive(Serialize, ToSchema)]
pub struct GetCategoryPostsResponse {
    pub category: CategoryDetailResponse,
    pub posts: Vec<PostPreviewResponse>,
    pub pagination: PaginationResponse,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    pub title: String,
    pub description: String,
    pub slug: String,
}

impl From<CategoryEntity> for CategoryDetailResponse {
    fn from(value: CategoryEntity) -> Self {
        Self {
            title: value.title,
            description: value.description,
            slug: value.slug,
        }
    }
}
