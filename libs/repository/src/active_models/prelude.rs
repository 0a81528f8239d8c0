pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::location::Entity as Location;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
