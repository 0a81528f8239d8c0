#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use chrono::{DateTime, Duration, Utc};
use entity::prelude::*;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use migration::{Migrator, MigratorTrait};
use repository::Repository;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};

pub const TEST_SECRET: &str = "router-test-secret";

/// The full router over a fresh in-memory database, plus the repository
/// for seeding. One pooled connection only, every `sqlite::memory:`
/// connection is a separate database.
pub async fn server() -> (Router, Repository) {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let repository = Repository::with_connection(db);

    let router = api::serve(
        repository.clone(),
        "Config.toml",
        TEST_SECRET.to_string(),
    )
    .await
    .unwrap();

    (router, repository)
}

/// A bearer token for the given username, signed with the test secret.
/// The subject matches what `seed_user` writes.
pub fn token_for(username: &str) -> String {
    let claims = json!({
        "sub": format!("auth0|{username}"),
        "username": username,
        "exp": (Utc::now() + Duration::days(1)).timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_as(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub fn post_form_as(
    uri: &str,
    token: &str,
    form: &[(&str, &str)],
) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

pub async fn seed_user(repository: &Repository, username: &str) -> UserEntity {
    let id = repository
        .user
        .save(UserEntity {
            sub: format!("auth0|{username}"),
            username: username.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    repository.user.find_by_id(id).await.unwrap().unwrap()
}

pub async fn seed_category(
    repository: &Repository,
    slug: &str,
    is_published: bool,
) -> CategoryEntity {
    let id = repository
        .category
        .save(CategoryEntity {
            title: format!("Category {slug}"),
            description: format!("Posts about {slug}"),
            slug: slug.to_string(),
            is_published,
            ..Default::default()
        })
        .await
        .unwrap();

    repository.category.find_by_id(id).await.unwrap().unwrap()
}

pub async fn seed_post(
    repository: &Repository,
    title: &str,
    author_id: i32,
    category_id: Option<i32>,
    pub_date: DateTime<Utc>,
    is_published: bool,
) -> PostEntity {
    let id = repository
        .post
        .save(PostEntity {
            title: title.to_string(),
            text: format!("Body of {title}"),
            pub_date,
            author_id,
            category_id,
            is_published,
            ..Default::default()
        })
        .await
        .unwrap();

    repository.post.find_by_id(id).await.unwrap().unwrap()
}

pub async fn seed_comment(
    repository: &Repository,
    post_id: i32,
    author_id: i32,
    text: &str,
    created_at: DateTime<Utc>,
) -> CommentEntity {
    let id = repository
        .comment
        .save(CommentEntity {
            text: text.to_string(),
            post_id,
            author_id,
            created_at,
            ..Default::default()
        })
        .await
        .unwrap();

    repository.comment.find_by_id(id).await.unwrap().unwrap()
}
