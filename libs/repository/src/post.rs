use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    entity::*, ActiveValue, Condition, DatabaseConnection, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        PostEntity {
            id: value.id,
            title: value.title,
            text: value.text,
            pub_date: value.pub_date.and_utc(),
            author_id: value.author_id,
            location_id: value.location_id,
            category_id: value.category_id,
            image: value.image,
            is_published: value.is_published,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<PostEntity> for post::ActiveModel {
    fn from(value: PostEntity) -> Self {
        Self {
            id: {
                if value.id == i32::default() {
                    ActiveValue::not_set()
                } else {
                    ActiveValue::Set(value.id)
                }
            },
            title: ActiveValue::Set(value.title),
            text: ActiveValue::Set(value.text),
            pub_date: ActiveValue::Set(value.pub_date.naive_utc()),
            author_id: ActiveValue::Set(value.author_id),
            category_id: ActiveValue::Set(value.category_id),
            location_id: ActiveValue::Set(value.location_id),
            image: ActiveValue::Set(value.image),
            is_published: ActiveValue::Set(value.is_published),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

/// Filter for posts a reader may see: published, in a published (or no)
/// category, and past their publication date. Needs the category join.
fn visible_filter(as_of: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(post::Column::IsPublished.eq(true))
        .add(post::Column::PubDate.lte(as_of.naive_utc()))
        .add(
            Condition::any()
                .add(post::Column::CategoryId.is_null())
                .add(category::Column::IsPublished.eq(true)),
        )
}

impl PostRepository {
    pub async fn find_public_page(
        &self,
        as_of: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> anyhow::Result<Paginated<PostPreview>> {
        let select = Post::find()
            .join(JoinType::LeftJoin, post::Relation::Category.def())
            .filter(visible_filter(as_of))
            .order_by_desc(post::Column::PubDate);

        self.page_of(select, page, per_page).await
    }

    pub async fn find_category_page(
        &self,
        category_id: i32,
        as_of: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> anyhow::Result<Paginated<PostPreview>> {
        let select = Post::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .filter(post::Column::IsPublished.eq(true))
            .filter(post::Column::PubDate.lte(as_of.naive_utc()))
            .order_by_desc(post::Column::PubDate);

        self.page_of(select, page, per_page).await
    }

    /// The owner sees every post of theirs, scheduled and unpublished
    /// ones included. Anyone else gets the public view.
    pub async fn find_author_page(
        &self,
        author_id: i32,
        owner_view: bool,
        as_of: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> anyhow::Result<Paginated<PostPreview>> {
        let mut select = Post::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::PubDate);
        if !owner_view {
            select = select
                .join(JoinType::LeftJoin, post::Relation::Category.def())
                .filter(visible_filter(as_of));
        }

        self.page_of(select, page, per_page).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<PostEntity>> {
        let post = Post::find_by_id(id).one(&self.db).await?;

        Ok(post.map(PostEntity::from))
    }

    pub async fn find_detail(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<PostDetail>> {
        let Some(post) = Post::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let author = User::find_by_id(post.author_id)
            .one(&self.db)
            .await?
            .map(UserEntity::from)
            .ok_or_else(|| {
                anyhow::anyhow!("author {} is not found", post.author_id)
            })?;
        let category = match post.category_id {
            Some(category_id) => Category::find_by_id(category_id)
                .one(&self.db)
                .await?
                .map(CategoryEntity::from),
            None => None,
        };
        let location = match post.location_id {
            Some(location_id) => Location::find_by_id(location_id)
                .one(&self.db)
                .await?
                .map(LocationEntity::from),
            None => None,
        };

        let comments = Comment::find()
            .filter(comment::Column::PostId.eq(id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?;
        let commenter_ids: Vec<_> =
            comments.iter().map(|x| x.author_id).collect();
        let commenters: HashMap<_, _> = User::find()
            .filter(user::Column::Id.is_in(commenter_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, UserEntity::from(x)))
            .collect();

        let mut with_authors = vec![];
        for comment in comments {
            let author = commenters
                .get(&comment.author_id)
                .cloned()
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "author {} is not found",
                        comment.author_id
                    )
                })?;
            with_authors.push(CommentWithAuthor {
                comment: CommentEntity::from(comment),
                author,
            });
        }

        Ok(Some(PostDetail {
            post: PostEntity::from(post),
            author,
            category,
            location,
            comments: with_authors,
        }))
    }

    pub async fn save(&self, post: PostEntity) -> anyhow::Result<i32> {
        let post = post::ActiveModel::from(post).save(&self.db).await?;
        Ok(post.id.unwrap())
    }

    pub async fn delete(&self, post_id: i32) -> anyhow::Result<()> {
        post::Entity::delete(post::ActiveModel {
            id: ActiveValue::Set(post_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }

    async fn page_of(
        &self,
        select: Select<Post>,
        page: u64,
        per_page: u64,
    ) -> anyhow::Result<Paginated<PostPreview>> {
        let paginator = select.paginate(&self.db, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let posts = paginator.fetch_page(page.saturating_sub(1)).await?;
        let items = self.stitch(posts).await?;

        Ok(Paginated {
            items,
            page,
            per_page,
            total_items: totals.number_of_items,
            // an empty listing still has one (empty) page
            total_pages: totals.number_of_pages.max(1),
        })
    }

    async fn stitch(
        &self,
        posts: Vec<post::Model>,
    ) -> anyhow::Result<Vec<PostPreview>> {
        let post_ids: Vec<_> = posts.iter().map(|x| x.id).collect();
        let author_ids: Vec<_> = posts.iter().map(|x| x.author_id).collect();
        let category_ids: Vec<_> =
            posts.iter().filter_map(|x| x.category_id).collect();
        let location_ids: Vec<_> =
            posts.iter().filter_map(|x| x.location_id).collect();

        let authors: HashMap<_, _> = User::find()
            .filter(user::Column::Id.is_in(author_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, UserEntity::from(x)))
            .collect();
        let categories: HashMap<_, _> = Category::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, CategoryEntity::from(x)))
            .collect();
        let locations: HashMap<_, _> = Location::find()
            .filter(location::Column::Id.is_in(location_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, LocationEntity::from(x)))
            .collect();
        let comment_counts: HashMap<i32, i64> = Comment::find()
            .select_only()
            .column(comment::Column::PostId)
            .column_as(comment::Column::Id.count(), "count")
            .filter(comment::Column::PostId.is_in(post_ids))
            .group_by(comment::Column::PostId)
            .into_tuple::<(i32, i64)>()
            .all(&self.db)
            .await?
            .into_iter()
            .collect();

        let mut results = vec![];
        for post in posts {
            let author =
                authors.get(&post.author_id).cloned().ok_or_else(|| {
                    anyhow::anyhow!("author {} is not found", post.author_id)
                })?;
            let category =
                post.category_id.and_then(|x| categories.get(&x).cloned());
            let location =
                post.location_id.and_then(|x| locations.get(&x).cloned());
            let comment_count =
                comment_counts.get(&post.id).copied().unwrap_or(0) as u64;

            results.push(PostPreview {
                post: PostEntity::from(post),
                author,
                category,
                location,
                comment_count,
            });
        }

        Ok(results)
    }
}
