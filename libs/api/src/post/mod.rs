use axum::{
    extract::{Path, State},
    response::Redirect,
    Extension, Form, Json,
};
use entity::{policy::may_mutate, prelude::*};
use repository::Repository;

pub mod request;
pub mod response;

use crate::{
    auth::{current_user, Viewer},
    response::{ApiResponse, IntoApiResponse},
    ApiError, FieldError,
};

use self::{
    request::{NewPost, PostForm},
    response::GetPostResponse,
};

/// One post with its comment thread. Direct links resolve even when the
/// post is filtered out of the public feeds.
#[utoipa::path(
    get,
    path = "/posts/:id/",
    responses(
        (status = 200, description = "Get the post successfully", body = [GetPostResponse]),
        (status = 404, description = "Post is unknown")
    ),
    params(
        ("id", description = "post id")
    )
)]
pub async fn get_post(
    State(repository): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetPostResponse>> {
    let detail = repository
        .post
        .find_detail(id)
        .await
        .into_response("502-015")?;
    let Some(detail) = detail else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(GetPostResponse::from(detail)))
}

/// Publishes a new post by the signed-in user
#[utoipa::path(
    post,
    path = "/posts/create/",
    responses(
        (status = 303, description = "Redirect to the author's profile"),
        (status = 422, description = "Form is invalid")
    )
)]
pub async fn create_post(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Form(form): Form<PostForm>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;

    let new_post = form.validate().map_err(ApiError::Validation)?;
    check_references(&repository, &new_post).await?;

    repository
        .post
        .save(PostEntity {
            title: new_post.title,
            text: new_post.text,
            pub_date: new_post.pub_date,
            author_id: user.id,
            category_id: new_post.category_id,
            location_id: new_post.location_id,
            image: new_post.image,
            is_published: true,
            ..Default::default()
        })
        .await
        .into_response("502-005")?;

    Ok(Redirect::to(&format!("/profile/{}/", user.username)))
}

/// Rewrites a post. Only the author may; anyone else is bounced back to
/// the detail page.
#[utoipa::path(
    post,
    path = "/posts/:id/edit/",
    responses(
        (status = 303, description = "Redirect to the post detail"),
        (status = 404, description = "Post is unknown"),
        (status = 422, description = "Form is invalid")
    ),
    params(
        ("id", description = "post id")
    )
)]
pub async fn edit_post(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<i32>,
    Form(form): Form<PostForm>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let post = repository
        .post
        .find_by_id(id)
        .await
        .into_response("502-006")?;
    let Some(post) = post else {
        return Err(ApiError::NotFound);
    };

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;
    if !may_mutate(&post, &user) {
        return Err(ApiError::NotAuthor(post.id));
    }

    let new_post = form.validate().map_err(ApiError::Validation)?;
    check_references(&repository, &new_post).await?;

    // Authorship, publish flag and creation stamp survive the rewrite.
    repository
        .post
        .save(PostEntity {
            title: new_post.title,
            text: new_post.text,
            pub_date: new_post.pub_date,
            category_id: new_post.category_id,
            location_id: new_post.location_id,
            image: new_post.image,
            ..post
        })
        .await
        .into_response("502-005")?;

    Ok(Redirect::to(&format!("/posts/{}/", id)))
}

/// Deletes a post and its comments
#[utoipa::path(
    post,
    path = "/posts/:id/delete/",
    responses(
        (status = 303, description = "Redirect to the index"),
        (status = 404, description = "Post is unknown")
    ),
    params(
        ("id", description = "post id")
    )
)]
pub async fn delete_post(
    State(repository): State<Repository>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<i32>,
) -> ApiResponse<Redirect> {
    let Viewer(Some(claims)) = viewer else {
        return Err(ApiError::LoginRequired);
    };

    let post = repository
        .post
        .find_by_id(id)
        .await
        .into_response("502-006")?;
    let Some(post) = post else {
        return Err(ApiError::NotFound);
    };

    let user = current_user(&repository, &claims)
        .await
        .into_response("502-002")?;
    if !may_mutate(&post, &user) {
        return Err(ApiError::NotAuthor(post.id));
    }

    repository.post.delete(id).await.into_response("502-007")?;

    Ok(Redirect::to("/"))
}

/// Referenced category/location rows must exist before a post may point
/// at them.
async fn check_references(
    repository: &Repository,
    new_post: &NewPost,
) -> Result<(), ApiError> {
    if let Some(category_id) = new_post.category_id {
        let category = repository
            .category
            .find_by_id(category_id)
            .await
            .into_response("502-003")?;
        if category.is_none() {
            return Err(ApiError::Validation(vec![FieldError::new(
                "category",
                "select a valid choice",
            )]));
        }
    }

    if let Some(location_id) = new_post.location_id {
        let location = repository
            .location
            .find_by_id(location_id)
            .await
            .into_response("502-004")?;
        if location.is_none() {
            return Err(ApiError::Validation(vec![FieldError::new(
                "location",
                "select a valid choice",
            )]));
        }
    }

    Ok(())
}
