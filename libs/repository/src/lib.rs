use category::CategoryRepository;
use comment::CommentRepository;
use location::LocationRepository;
use migration::Migrator;
use migration::MigratorTrait;
use post::PostRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use user::UserRepository;

mod active_models;
pub mod category;
pub mod comment;
pub mod location;
pub mod post;
pub mod user;

#[derive(Clone, Debug)]
pub struct Repository {
    pub user: UserRepository,
    pub category: CategoryRepository,
    pub location: LocationRepository,
    pub post: PostRepository,
    pub comment: CommentRepository,
}

impl Repository {
    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self {
            user: UserRepository::new(db.clone()),
            category: CategoryRepository::new(db.clone()),
            location: LocationRepository::new(db.clone()),
            post: PostRepository::new(db.clone()),
            comment: CommentRepository::new(db),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(db_url: &str) -> Response<Repository> {
    let db = init_db(db_url).await?;

    Ok(Repository::with_connection(db))
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
