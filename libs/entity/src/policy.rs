use chrono::{DateTime, Utc};

use crate::{category::Category, comment::Comment, post::Post, user::User};

/// Whether a post may appear in public listings at the given instant.
///
/// `category` is the post's resolved category, if it has one. A post
/// without a category is listed on its own flags; a post in an
/// unpublished category stays hidden even when the post itself is
/// published. A future `pub_date` keeps the post hidden until that
/// instant passes, which is the deferred-publication mechanism.
pub fn is_publicly_visible(
    post: &Post,
    category: Option<&Category>,
    as_of: DateTime<Utc>,
) -> bool {
    post.is_published
        && category.map_or(true, |category| category.is_published)
        && post.pub_date <= as_of
}

/// Anything owned by a single authoring user.
pub trait Authored {
    fn author_id(&self) -> i32;
}

impl Authored for Post {
    fn author_id(&self) -> i32 {
        self.author_id
    }
}

impl Authored for Comment {
    fn author_id(&self) -> i32 {
        self.author_id
    }
}

/// Whether `user` may edit or delete the given post or comment. Only the
/// author may; there is no moderator override at this level.
pub fn may_mutate<T: Authored>(entity: &T, user: &User) -> bool {
    entity.author_id() == user.id
}
