use chrono::{DateTime, Utc};
use sea_orm::{entity::*, ActiveValue, DatabaseConnection, EntityTrait};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct LocationRepository {
    db: DatabaseConnection,
}

impl LocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<location::Model> for LocationEntity {
    fn from(value: location::Model) -> Self {
        LocationEntity {
            id: value.id,
            name: value.name,
            is_published: value.is_published,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<LocationEntity> for location::ActiveModel {
    fn from(value: LocationEntity) -> Self {
        Self {
            id: {
                if value.id == i32::default() {
                    ActiveValue::not_set()
                } else {
                    ActiveValue::Set(value.id)
                }
            },
            name: ActiveValue::Set(value.name),
            is_published: ActiveValue::Set(value.is_published),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl LocationRepository {
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<LocationEntity>> {
        let location = Location::find_by_id(id).one(&self.db).await?;

        Ok(location.map(LocationEntity::from))
    }

    pub async fn save(&self, location: LocationEntity) -> anyhow::Result<i32> {
        let location =
            location::ActiveModel::from(location).save(&self.db).await?;
        Ok(location.id.unwrap())
    }

    pub async fn delete(&self, location_id: i32) -> anyhow::Result<()> {
        location::Entity::delete(location::ActiveModel {
            id: ActiveValue::Set(location_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(())
    }
}
