use chrono::{DateTime, Utc};

use crate::user::User;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub post_id: i32,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}
