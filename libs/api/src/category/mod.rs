use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

pub mod request;
pub mod response;

use crate::{
    feed::response::{PaginationResponse, PostPreviewResponse},
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{
    request::GetCategoryPostsParam,
    response::{CategoryDetailResponse, GetCategoryPostsResponse},
};

/// Posts of one published category, newest first
#[utoipa::path(
    get,
    path = "/category/:slug/",
    responses(
        (status = 200, description = "List the category posts successfully", body = [GetCategoryPostsResponse]),
        (status = 404, description = "Category is unknown or unpublished")
    ),
    params(
        ("slug", description = "category slug"),
        GetCategoryPostsParam
    )
)]
pub async fn get_category_posts(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
    Query(params): Query<GetCategoryPostsParam>,
) -> ApiResponse<Json<GetCategoryPostsResponse>> {
    let category = state
        .repo
        .category
        .find_published_by_slug(&slug)
        .await
        .into_response("502-003")?;
    let Some(category) = category else {
        return Err(ApiError::NotFound);
    };

    let page = params.pagination.page();
    if page == 0 {
        return Err(ApiError::NotFound);
    }

    let posts = state
        .repo
        .post
        .find_category_page(
            category.id,
            Utc::now(),
            page,
            state.config.feed.page_size,
        )
        .await
        .into_response("502-014")?;

    if page > posts.total_pages && page != 1 {
        return Err(ApiError::NotFound);
    }

    let pagination = PaginationResponse::from(&posts);
    let response = Json(GetCategoryPostsResponse {
        category: CategoryDetailResponse::from(category),
        posts: posts
            .items
            .into_iter()
            .map(PostPreviewResponse::from)
            .collect(),
        pagination,
    });

    Ok(response)
}
