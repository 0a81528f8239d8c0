#![allow(dead_code)]

use chrono::{DateTime, Utc};
use entity::prelude::*;
use migration::{Migrator, MigratorTrait};
use repository::Repository;
use sea_orm::{ConnectOptions, Database};

/// A repository over a fresh in-memory database. One connection only,
/// every pooled connection of `sqlite::memory:` is a separate database.
pub async fn repository() -> Repository {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Repository::with_connection(db)
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

pub async fn seed_location(
    repository: &Repository,
    name: &str,
) -> LocationEntity {
    let id = repository
        .location
        .save(LocationEntity {
            name: name.to_string(),
            is_published: true,
            ..Default::default()
        })
        .await
        .unwrap();

    repository.location.find_by_id(id).await.unwrap().unwrap()
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
