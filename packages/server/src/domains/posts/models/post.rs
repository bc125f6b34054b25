use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored post row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub author: String,
    pub summary: String,
    /// Markdown source
    pub content: String,
    pub views: i64,
    pub likes: i64,
}

/// The columns shown in post listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub author: String,
    pub summary: String,
}

/// Editable post fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub date: NaiveDate,
    pub author: String,
    pub summary: String,
    pub content: String,
}

impl PostInput {
    /// Row written when engagement arrives for a slug before its post exists.
    pub fn placeholder() -> Self {
        Self {
            title: "Unknown".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date"),
            author: "System".to_string(),
            summary: String::new(),
            content: String::new(),
        }
    }

    /// Build a fresh row from these fields with zeroed counters.
    pub fn into_post(self, slug: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: self.title,
            date: self.date,
            author: self.author,
            summary: self.summary,
            content: self.content,
            views: 0,
            likes: 0,
        }
    }
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: post.date,
            author: post.author.clone(),
            summary: post.summary.clone(),
        }
    }
}
