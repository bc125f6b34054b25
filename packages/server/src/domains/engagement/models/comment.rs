use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::CommentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub post_slug: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A comment before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_slug: String,
    pub author: String,
    pub text: String,
}

/// View and like counters of a single post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostCounters {
    pub views: i64,
    pub likes: i64,
}
