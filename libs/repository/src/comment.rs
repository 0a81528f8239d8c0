use chrono::{DateTime, Utc};
use sea_orm::{entity::*, ActiveValue, DatabaseConnection, EntityTrait};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CommentRepository {
    db: DatabaseConnection,
}

impl CommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<comment::Model> for CommentEntity {
    fn from(value: comment::Model) -> Self {
        CommentEntity {
            id: value.id,
            text: value.text,
            post_id: value.post_id,
            author_id: value.author_id,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<CommentEntity> for comment::ActiveModel {
    fn from(value: CommentEntity) -> Self {
        Self {
            id: {
                if value.id == i32::default() {
                    ActiveValue::not_set()
                } else {
                    ActiveValue::Set(value.id)
                }
            },
            text: ActiveValue::Set(value.text),
            post_id: ActiveValue::Set(value.post_id),
            author_id: ActiveValue::Set(value.author_id),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl CommentRepository {
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<CommentEntity>> {
        let comment = Comment::find_by_id(id).one(&self.db).await?;

        Ok(comment.map(CommentEntity::from))
    }

    pub async fn save(&self, comment: CommentEntity) -> anyhow::Result<i32> {
        let comment =
            comment::ActiveModel::from(comment).save(&self.db).await?;
        Ok(comment.id.unwrap())
    }

    pub async fn delete(&self, comment_id: i32) -> anyhow::Result<()> {
        comment::Entity::delete(comment::ActiveModel {
            id: ActiveValue::Set(comment_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
