use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Extension, Form, Json,
};
use chrono::Utc;
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::{
    auth::{current_user, Viewer},
    feed::response::{PaginationResponse, PostPreviewResponse},
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState, FieldError,
};

use self::{
    request::{EditProfileForm, GetProfileParam},
    response::{GetProfileResponse, ProfileResponse},
};

/// A user's posts, newest first, with the account header
#[utoipa::path(
    get,
    path = "/profile/:username/",
    responses(
        (status = 200, description = "List the user's posts successfully", body = [GetProfileResponse]),
        (status = 404, description = "Username is unknown")
    ),
    params(
        ("username", description = "profile username"),
        GetProfileParam
    )
)]
pub async fn get_profile(
    State(state): State<ApiState>,
    Extension(viewer): Extension<Viewer>,
    Path(username): Path<String>,
    Query(params): Query<GetProfileParam>,
) -> ApiResponse<Json<GetProfileResponse>> {
    let user = state
        .repo
        .user
        .find_by_username(&username)
        .await
        .into_response("502-011")?;
    let Some(user) = user else {
        return Err(ApiError::NotFound);
    };

    let page = params.pagination.page();
    if page == 0 {
        return Err(ApiError::NotFound);
    }

    // Owners see their own scheduled and hidden posts.
    let owner_view = viewer
        .0
        .as_ref()
        .map(|claims| claims.sub == user.sub)
        .unwrap_or(false);

    let posts = state
        .repo
        .post
        .find_author_page(
            user.id,
            owner_view,
            Utc::now(),
            page,
            state.config.feed.page_size,
        )
        .await
        .into_response("502-012")?;

    if page > posts.total_pages && page != 1 {
        return Err(ApiError::NotFound);
    }

    let email = if owner_view { user.email } else { None };

    let pagination = PaginationResponse::from(&posts);
    let response = Json(GetProfileResponse {
        profile: ProfileResponse {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email,
        },
        posts: posts
            .items
            .into_iter()
            .map(PostPreviewResponse::from)
            .collect(),
        pagination,
    });

    Ok(response)
}

/// Updates the signed-in user's account fields
#[utoipa::path(
    post,
    path = "/profile/edit/",
    responses(
        (status = 303, description = "Redirect to the updated profile"),
        (status = 422, description = "Form is invalid")
    )
)]
pub async fn edit_profile(
    State(state): State<ApiState>,
    Extension(viewer): Extension<Viewer>,
    Form(form): Form<EditProfileForm>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let user = current_user(&state.repo, &claims)
        .await
        .into_response("502-002")?;

    let changes = form.validate().map_err(ApiError::Validation)?;

    // The username stays unique. The requester's own row does not count
    // as taken, so keeping the current name is always allowed.
    let taken = state
        .repo
        .user
        .find_by_username(&changes.username)
        .await
        .into_response("502-011")?;
    if taken.map(|taken| taken.id != user.id).unwrap_or(false) {
        return Err(ApiError::Validation(vec![FieldError::new(
            "username",
            "a user with that username already exists",
        )]));
    }

    let username = changes.username.clone();
    state
        .repo
        .user
        .save(UserEntity {
            username: changes.username,
            first_name: changes.first_name,
            last_name: changes.last_name,
            email: changes.email,
            ..user
        })
        .await
        .into_response("502-013")?;

    Ok(Redirect::to(&format!("/profile/{}/", username)))
}
