pub mod category;
pub mod comment;
pub mod location;
pub mod pagination;
pub mod policy;
pub mod post;
pub mod user;

pub mod prelude {
    pub use crate::category::Category as CategoryEntity;
    pub use crate::comment::Comment as CommentEntity;
    pub use crate::comment::CommentWithAuthor;
    pub use crate::location::Location as LocationEntity;
    pub use crate::pagination::Paginated;
    pub use crate::post::Post as PostEntity;
    pub use crate::post::{PostDetail, PostPreview};
    pub use crate::user::User as UserEntity;
}
