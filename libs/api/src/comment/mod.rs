use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension, Form,
};
use entity::{policy::may_mutate, prelude::*};
use repository::Repository;

pub mod request;

use crate::{
    auth::{current_user, Viewer},
    response::{ApiResponse, IntoApiResponse},
    ApiError,
};

use self::request::CommentForm;

/// Attaches a comment to a post
#[utoipa::path(
    post,
    path = "/posts/:id/comment/",
    responses(
        (status = 303, description = "Redirect to the post detail"),
        (status = 404, description = "Post is unknown"),
        (status = 422, description = "Form is invalid")
    ),
    params(
        ("id", description = "post id")
    )
)]
pub async fn create_comment(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<i32>,
    Form(form): Form<CommentForm>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let post = repository
        .post
        .find_by_id(id)
        .await
        .into_response("502-006")?;
    if post.is_none() {
        return Err(ApiError::NotFound);
    }

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;

    let text = form.validate().map_err(ApiError::Validation)?;

    repository
        .comment
        .save(CommentEntity {
            text,
            post_id: id,
            author_id: user.id,
            ..Default::default()
        })
        .await
        .into_response("502-008")?;

    Ok(Redirect::to(&format!("/posts/{}/", id)))
}

/// Rewrites a comment's text. Anyone but the author gets a 404, as if
/// the comment did not exist.
#[utoipa::path(
    post,
    path = "/posts/:id/edit_comment/:comment_id/",
    responses(
        (status = 303, description = "Redirect to the post detail"),
        (status = 404, description = "Comment is unknown or not yours"),
        (status = 422, description = "Form is invalid")
    ),
    params(
        ("id", description = "post id"),
        ("comment_id", description = "comment id")
    )
)]
pub async fn edit_comment(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Path((id, comment_id)): Path<(i32, i32)>,
    Form(form): Form<CommentForm>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let comment = repository
        .comment
        .find_by_id(comment_id)
        .await
        .into_response("502-009")?;
    let Some(comment) = comment else {
        return Err(ApiError::NotFound);
    };
    if comment.post_id != id {
        return Err(ApiError::NotFound);
    }

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;
    if !may_mutate(&comment, &user) {
        return Err(ApiError::NotFound);
    }

    let text = form.validate().map_err(ApiError::Validation)?;

    // Only the text changes; the creation stamp stays.
    let post_id = comment.post_id;
    repository
        .comment
        .save(CommentEntity { text, ..comment })
        .await
        .into_response("502-008")?;

    Ok(Redirect::to(&format!("/posts/{}/", post_id)))
}

/// Removes a comment. Same author-or-404 rule as editing.
#[utoipa::path(
    post,
    path = "/posts/:id/delete_comment/:comment_id/",
    responses(
        (status = 303, description = "Redirect to the post detail"),
        (status = 404, description = "Comment is unknown or not yours")
    ),
    params(
        ("id", description = "post id"),
        ("comment_id", description = "comment id")
    )
)]
pub async fn delete_comment(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let comment = repository
        .comment
        .find_by_id(comment_id)
        .await
        .into_response("502-009")?;
    let Some(comment) = comment else {
        return Err(ApiError::NotFound);
    };
    if comment.post_id != id {
        return Err(ApiError::NotFound);
    }

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;
    if !may_mutate(&comment, &user) {
        return Err(ApiError::NotFound);
    }

    repository
        .comment
        .delete(comment_id)
        .await
        .into_response("502-010")?;

    Ok(Redirect::to(&format!("/posts/{}/", comment.post_id)))
}
