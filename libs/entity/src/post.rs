use chrono::{DateTime, Utc};

use crate::{
    category::Category, comment::CommentWithAuthor, location::Location,
    user::User,
};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i32,
    pub location_id: Option<i32>,
    pub category_id: Option<i32>,
    pub image: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// A post as a feed lists it: related rows stitched in and the comment
/// count annotated.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostPreview {
    pub post: Post,
    pub author: User,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub comment_count: u64,
}

/// A single post with its full comment thread.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub comments: Vec<CommentWithAuthor>,
}
