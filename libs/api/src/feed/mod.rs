use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

pub mod request;
pub mod response;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{
    request::GetFeedParam,
    response::{GetFeedResponse, PaginationResponse, PostPreviewResponse},
};

/// Global index of publicly visible posts, newest first
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "List visible posts successfully", body = [GetFeedResponse])
    ),
    params(
        GetFeedParam
    )
)]
pub async fn get_feed(
    State(state): State<ApiState>,
    Query(params): Query<GetFeedParam>,
) -> ApiResponse<Json<GetFeedResponse>> {
    let page = params.pagination.page();
    if page == 0 {
        return Err(ApiError::NotFound);
    }

    let posts = state
        .repo
        .post
        .find_public_page(Utc::now(), page, state.config.feed.page_size)
        .await
        .into_response("502-001")?;

    if page > posts.total_pages && page != 1 {
        return Err(ApiError::NotFound);
    }

    let pagination = PaginationResponse::from(&posts);
    let response = Json(GetFeedResponse {
        posts: posts
            .items
            .into_iter()
            .map(PostPreviewResponse::from)
            .collect(),
        pagination,
    });

    Ok(response)
}
