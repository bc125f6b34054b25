use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{BlogError, BlogResult};
use crate::domains::posts::models::{Post, PostInput, PostSummary};

/// Listing entry; `id` mirrors `slug` for older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryData {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub summary: String,
}

impl From<PostSummary> for PostSummaryData {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.slug.clone(),
            slug: summary.slug,
            title: summary.title,
            date: summary.date.to_string(),
            author: summary.author,
            summary: summary.summary,
        }
    }
}

/// A full post with its markdown rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostData {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub summary: String,
    pub content: String,
    #[serde(rename = "contentHtml")]
    pub content_html: String,
    pub views: i64,
    pub likes: i64,
}

impl PostData {
    pub fn new(post: Post, content_html: String) -> Self {
        Self {
            id: post.slug.clone(),
            slug: post.slug,
            title: post.title,
            date: post.date.to_string(),
            author: post.author,
            summary: post.summary,
            content: post.content,
            content_html,
            views: post.views,
            likes: post.likes,
        }
    }
}

/// Editor form body for create and update.
///
/// Text fields default to empty; `date` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    /// Slug of the post being edited (update only)
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub date: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
}

impl PostForm {
    pub fn into_input(self) -> BlogResult<PostInput> {
        let date = parse_post_date(self.date.as_deref())?;
        Ok(PostInput {
            title: self.title,
            date,
            author: self.author,
            summary: self.summary,
            content: self.content,
        })
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_post_date(raw: Option<&str>) -> BlogResult<NaiveDate> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BlogError::validation("Post date is required"))?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| BlogError::validation("Invalid date, expected YYYY-MM-DD"))
}
