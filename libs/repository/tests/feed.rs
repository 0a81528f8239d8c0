mod common;

use chrono::{Duration, TimeZone, Utc};
use entity::policy::is_publicly_visible;

#[tokio::test]
async fn test_public_feed_returns_only_visible_posts() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let news = common::seed_category(&repository, "news", true).await;
    let drafts = common::seed_category(&repository, "drafts", false).await;
    let now = Utc::now();

    common::seed_post(
        &repository,
        "visible",
        author.id,
        Some(news.id),
        now - Duration::hours(3),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "no category",
        author.id,
        None,
        now - Duration::hours(2),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "unpublished",
        author.id,
        Some(news.id),
        now - Duration::hours(1),
        false,
    )
    .await;
    common::seed_post(
        &repository,
        "hidden category",
        author.id,
        Some(drafts.id),
        now - Duration::hours(1),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "scheduled",
        author.id,
        Some(news.id),
        now + Duration::hours(3),
        true,
    )
    .await;

    // Act
    let page = repository.post.find_public_page(now, 1, 10).await.unwrap();

    // Assert
    let titles: Vec<_> =
        page.items.iter().map(|x| x.post.title.as_str()).collect();
    assert_eq!(titles, vec!["no category", "visible"]);
    assert_eq!(page.total_items, 2);
}

#[tokio::test]
async fn test_public_feed_agrees_with_visibility_predicate() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let news = common::seed_category(&repository, "news", true).await;
    let drafts = common::seed_category(&repository, "drafts", false).await;
    let now = Utc::now();

    let mut seeded = vec![];
    for (i, (category, published, offset)) in [
        (Some(&news), true, -4),
        (Some(&news), false, -3),
        (Some(&drafts), true, -2),
        (None, true, -1),
        (None, false, -1),
        (Some(&news), true, 2),
        (None, true, 2),
    ]
    .iter()
    .enumerate()
    {
        let post = common::seed_post(
            &repository,
            &format!("post {i}"),
            author.id,
            category.map(|x| x.id),
            now + Duration::hours(*offset),
            *published,
        )
        .await;
        seeded.push((post, *category));
    }

    // Act
    let page = repository.post.find_public_page(now, 1, 10).await.unwrap();

    // Assert
    for (post, category) in &seeded {
        let listed = page.items.iter().any(|x| x.post.id == post.id);
        assert_eq!(listed, is_publicly_visible(post, *category, now));
    }
}

#[tokio::test]
async fn test_public_feed_orders_newest_first_and_paginates() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let now = Utc::now();
    for i in 0..12 {
        common::seed_post(
            &repository,
            &format!("post {i}"),
            author.id,
            None,
            now - Duration::hours(i + 1),
            true,
        )
        .await;
    }

    // Act
    let first = repository.post.find_public_page(now, 1, 10).await.unwrap();
    let second = repository.post.find_public_page(now, 2, 10).await.unwrap();

    // Assert
    assert_eq!(first.items.len(), 10);
    assert_eq!(second.items.len(), 2);
    assert_eq!(first.total_items, 12);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items[0].post.title, "post 0");
    assert_eq!(first.items[9].post.title, "post 9");
    assert_eq!(second.items[0].post.title, "post 10");
}

#[tokio::test]
async fn test_public_feed_counts_comments() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let reader = common::seed_user(&repository, "bob").await;
    let now = Utc::now();
    let commented = common::seed_post(
        &repository,
        "commented",
        author.id,
        None,
        now - Duration::hours(1),
        true,
    )
    .await;
    let quiet = common::seed_post(
        &repository,
        "quiet",
        author.id,
        None,
        now - Duration::hours(2),
        true,
    )
    .await;
    for i in 0..3 {
        common::seed_comment(
            &repository,
            commented.id,
            reader.id,
            &format!("comment {i}"),
            now - Duration::minutes(i),
        )
        .await;
    }

    // Act
    let page = repository.post.find_public_page(now, 1, 10).await.unwrap();

    // Assert
    let count_of = |id| {
        page.items
            .iter()
            .find(|x| x.post.id == id)
            .unwrap()
            .comment_count
    };
    assert_eq!(count_of(commented.id), 3);
    assert_eq!(count_of(quiet.id), 0);
}

#[tokio::test]
async fn test_category_feed_scopes_to_category() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let news = common::seed_category(&repository, "news", true).await;
    let travel = common::seed_category(&repository, "travel", true).await;
    let now = Utc::now();
    common::seed_post(
        &repository,
        "in news",
        author.id,
        Some(news.id),
        now - Duration::hours(1),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "in travel",
        author.id,
        Some(travel.id),
        now - Duration::hours(1),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "unpublished in news",
        author.id,
        Some(news.id),
        now - Duration::hours(1),
        false,
    )
    .await;

    // Act
    let page = repository
        .post
        .find_category_page(news.id, now, 1, 10)
        .await
        .unwrap();

    // Assert
    let titles: Vec<_> =
        page.items.iter().map(|x| x.post.title.as_str()).collect();
    assert_eq!(titles, vec!["in news"]);
}

#[tokio::test]
async fn test_category_lookup_ignores_unpublished() {
    // Arrange
    let repository = common::repository().await;
    common::seed_category(&repository, "news", true).await;
    common::seed_category(&repository, "drafts", false).await;

    // Act
    let news = repository
        .category
        .find_published_by_slug("news")
        .await
        .unwrap();
    let drafts = repository
        .category
        .find_published_by_slug("drafts")
        .await
        .unwrap();

    // Assert
    assert!(news.is_some());
    assert!(drafts.is_none());
}

#[tokio::test]
async fn test_profile_feed_owner_sees_everything() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let other = common::seed_user(&repository, "bob").await;
    let drafts = common::seed_category(&repository, "drafts", false).await;
    let now = Utc::now();
    common::seed_post(
        &repository,
        "visible",
        author.id,
        None,
        now - Duration::hours(3),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "unpublished",
        author.id,
        None,
        now - Duration::hours(2),
        false,
    )
    .await;
    common::seed_post(
        &repository,
        "scheduled",
        author.id,
        None,
        now + Duration::hours(2),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "hidden category",
        author.id,
        Some(drafts.id),
        now - Duration::hours(1),
        true,
    )
    .await;
    common::seed_post(
        &repository,
        "by someone else",
        other.id,
        None,
        now - Duration::hours(1),
        true,
    )
    .await;

    // Act
    let own = repository
        .post
        .find_author_page(author.id, true, now, 1, 10)
        .await
        .unwrap();
    let public = repository
        .post
        .find_author_page(author.id, false, now, 1, 10)
        .await
        .unwrap();

    // Assert
    let own_titles: Vec<_> =
        own.items.iter().map(|x| x.post.title.as_str()).collect();
    assert_eq!(
        own_titles,
        vec!["scheduled", "hidden category", "unpublished", "visible"]
    );
    let public_titles: Vec<_> =
        public.items.iter().map(|x| x.post.title.as_str()).collect();
    assert_eq!(public_titles, vec!["visible"]);
}

#[tokio::test]
async fn test_detail_returns_hidden_posts() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let drafts = common::seed_category(&repository, "drafts", false).await;
    let now = Utc::now();
    let unpublished = common::seed_post(
        &repository,
        "unpublished",
        author.id,
        Some(drafts.id),
        now + Duration::hours(3),
        false,
    )
    .await;

    // Act
    let detail = repository.post.find_detail(unpublished.id).await.unwrap();

    // Assert
    let detail = detail.unwrap();
    assert_eq!(detail.post.title, "unpublished");
    assert_eq!(detail.author.username, "alice");
    assert_eq!(detail.category.unwrap().slug, "drafts");
}

#[tokio::test]
async fn test_detail_orders_comments_oldest_first() {
    // Arrange
    let repository = common::repository().await;
    let author = common::seed_user(&repository, "alice").await;
    let reader = common::seed_user(&repository, "bob").await;
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let post = common::seed_post(
        &repository,
        "discussed",
        author.id,
        None,
        now,
        true,
    )
    .await;
    common::seed_comment(
        &repository,
        post.id,
        reader.id,
        "second",
        now + Duration::minutes(10),
    )
    .await;
    common::seed_comment(&repository, post.id, author.id, "first", now).await;
    common::seed_comment(
        &repository,
        post.id,
        reader.id,
        "third",
        now + Duration::minutes(20),
    )
    .await;

    // Act
    let detail = repository.post.find_detail(post.id).await.unwrap().unwrap();

    // Assert
    let texts: Vec<_> = detail
        .comments
        .iter()
        .map(|x| x.comment.text.as_str())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
    assert_eq!(detail.comments[0].author.username, "alice");
    assert_eq!(detail.comments[1].author.username, "bob");
}

#[tokio::test]
async fn test_empty_feed_still_has_one_page() {
    // Arrange
    let repository = common::repository().await;

    // Act
    let page = repository
        .post
        .find_public_page(Utc::now(), 1, 10)
        .await
        .unwrap();

    // Assert
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 1);
}
