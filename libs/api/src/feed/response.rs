use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GetFeedResponse {
    pub posts: Vec<PostPreviewResponse>,
    pub pagination: PaginationResponse,
}

/// A post as every feed lists it.
#[derive(Serialize, ToSchema)]
pub struct PostPreviewResponse {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: String,
    pub author: AuthorResponse,
    pub category: Option<CategoryResponse>,
    pub location: Option<LocationResponse>,
    pub image: Option<String>,
    pub is_published: bool,
    pub comment_count: u64,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorResponse {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    pub title: String,
    pub slug: String,
}

#[derive(Serialize, ToSchema)]
pub struct LocationResponse {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct PaginationResponse {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<PostPreview> for PostPreviewResponse {
    fn from(value: PostPreview) -> Self {
        Self {
            id: value.post.id,
            title: value.post.title,
            text: value.post.text,
            pub_date: value.post.pub_date.to_rfc3339(),
            author: AuthorResponse::from(value.author),
            category: value.category.map(CategoryResponse::from),
            location: value.location.map(LocationResponse::from),
            image: value.post.image,
            is_published: value.post.is_published,
            comment_count: value.comment_count,
        }
    }
}

impl From<UserEntity> for AuthorResponse {
    fn from(value: UserEntity) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

impl From<CategoryEntity> for CategoryResponse {
    fn from(value: CategoryEntity) -> Self {
        Self {
            title: value.title,
            slug: value.slug,
        }
    }
}

impl From<LocationEntity> for LocationResponse {
    fn from(value: LocationEntity) -> Self {
        Self { name: value.name }
    }
}

impl<T> From<&Paginated<T>> for PaginationResponse {
    fn from(value: &Paginated<T>) -> Self {
        Self {
            page: value.page,
            per_page: value.per_page,
            total_items: value.total_items,
            total_pages: value.total_pages,
        }
    }
}
