pub use sea_orm_migration::prelude::*;

mod m20250614_101500_create_user_table;
mod m20250614_101512_create_category_table;
mod m20250614_101519_create_location_table;
mod m20250614_101527_create_post_table;
mod m20250614_101536_create_comment_table;
mod m20250614_102244_create_index_at_post;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250614_101500_create_user_table::Migration),
            Box::new(m20250614_101512_create_category_table::Migration),
            Box::new(m20250614_101519_create_location_table::Migration),
            Box::new(m20250614_101527_create_post_table::Migration),
            Box::new(m20250614_101536_create_comment_table::Migration),
            Box::new(m20250614_102244_create_index_at_post::Migration),
        ]
    }
}
