use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::feed::response::{
    AuthorResponse, CategoryResponse, LocationResponse,
};

/// The full detail page document: the post, its comment thread and a
/// blank form for the next comment.
#[derive(Serialize, ToSchema)]
pub struct GetPostResponse {
    pub post: PostDetailResponse,
    pub comments: Vec<CommentResponse>,
    pub comment_form: CommentFormResponse,
}

#[derive(Serialize, ToSchema)]
pub struct PostDetailResponse {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: String,
    pub author: AuthorResponse,
    pub category: Option<CategoryResponse>,
    pub location: Option<LocationResponse>,
    pub image: Option<String>,
    pub is_published: bool,
}

#[derive(Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub text: String,
    pub author: AuthorResponse,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct CommentFormResponse {
    pub text: String,
}

impl From<PostDetail> for GetPostResponse {
    fn from(value: PostDetail) -> Self {
        Self {
            post: PostDetailResponse {
                id: value.post.id,
                title: value.post.title,
                text: value.post.text,
                pub_date: value.post.pub_date.to_rfc3339(),
                author: AuthorResponse::from(value.author),
                category: value.category.map(CategoryResponse::from),
                location: value.location.map(LocationResponse::from),
                image: value.post.image,
                is_published: value.post.is_published,
            },
            comments: value
                .comments
                .into_iter()
                .map(CommentResponse::from)
                .collect(),
            comment_form: CommentFormResponse {
                text: "".to_string(),
            },
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(value: CommentWithAuthor) -> Self {
        Self {
            id: value.comment.id,
            text: value.comment.text,
            author: AuthorResponse::from(value.author),
            created_at: value.comment.created_at.to_rfc3339(),
        }
    }
}
