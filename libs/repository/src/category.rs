use chrono::{DateTime, Utc};
use sea_orm::{
    entity::*, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<category::Model> for CategoryEntity {
    fn from(value: category::Model) -> Self {
        CategoryEntity {
            id: value.id,
            title: value.title,
            description: value.description,
            slug: value.slug,
            is_published: value.is_published,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<CategoryEntity> for category::ActiveModel {
    fn from(value: CategoryEntity) -> Self {
        Self {
            id: {
                if value.id == i32::default() {
                    ActiveValue::not_set()
                } else {
                    ActiveValue::Set(value.id)
                }
            },
            title: ActiveValue::Set(value.title),
            description: ActiveValue::Set(value.description),
            slug: ActiveValue::Set(value.slug),
            is_published: ActiveValue::Set(value.is_published),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl CategoryRepository {
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<CategoryEntity>> {
        let category = Category::find_by_id(id).one(&self.db).await?;

        Ok(category.map(CategoryEntity::from))
    }

    /// Looks a category up by its slug, ignoring unpublished ones.
    pub async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> anyhow::Result<Option<CategoryEntity>> {
        let category = Category::find()
            .filter(category::Column::Slug.eq(slug))
            .filter(category::Column::IsPublished.eq(true))
            .one(&self.db)
            .await?;

        Ok(category.map(CategoryEntity::from))
    }

    pub async fn save(&self, category: CategoryEntity) -> anyhow::Result<i32> {
        let category =
            category::ActiveModel::from(category).save(&self.db).await?;
        Ok(category.id.unwrap())
    }

    pub async fn delete(&self, category_id: i32) -> anyhow::Result<()> {
        category::Entity::delete(category::ActiveModel {
            id: ActiveValue::Set(category_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
