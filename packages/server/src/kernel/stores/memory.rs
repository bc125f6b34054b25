//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::common::CommentId;
use crate::domains::engagement::models::{Comment, NewComment, PostCounters};
use crate::domains::posts::models::{Post, PostInput, PostSummary};
use crate::kernel::{BaseCommentStore, BasePostStore, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    posts: HashMap<String, Post>,
    /// Insertion order doubles as creation order.
    comments: Vec<Comment>,
}

/// In-memory storage for posts and comments.
///
/// Both tables sit behind one lock, so every operation is atomic just like
/// a single SQL statement. Not suitable for production as data is lost on
/// restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage: every operation fails with `StoreError::Unavailable`
    /// until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of stored posts.
    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }

    /// Get the number of stored comments across all posts.
    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

/// Newest date first; slug breaks ties so listings are stable.
fn sorted_posts(posts: &HashMap<String, Post>) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.values().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    sorted
}

#[async_trait]
impl BasePostStore for MemoryStore {
    async fn list_post_summaries(&self) -> StoreResult<Vec<PostSummary>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(sorted_posts(&tables.posts)
            .into_iter()
            .map(PostSummary::from)
            .collect())
    }

    async fn list_post_slugs(&self) -> StoreResult<Vec<String>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(sorted_posts(&tables.posts)
            .into_iter()
            .map(|p| p.slug.clone())
            .collect())
    }

    async fn find_post(&self, slug: &str) -> StoreResult<Option<Post>> {
        self.check_available()?;
        Ok(self.tables.read().await.posts.get(slug).cloned())
    }

    async fn insert_post(&self, slug: &str, input: &PostInput) -> StoreResult<Post> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.posts.contains_key(slug) {
            return Err(StoreError::Conflict {
                entity: "post",
                key: slug.to_string(),
            });
        }
        let post = input.clone().into_post(slug);
        tables.posts.insert(slug.to_string(), post.clone());
        Ok(post)
    }

    async fn update_post(&self, slug: &str, input: &PostInput) -> StoreResult<Option<Post>> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        Ok(tables.posts.get_mut(slug).map(|post| {
            post.title = input.title.clone();
            post.date = input.date;
            post.author = input.author.clone();
            post.summary = input.summary.clone();
            post.content = input.content.clone();
            post.clone()
        }))
    }

    async fn delete_post(&self, slug: &str) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let removed = tables.posts.remove(slug).is_some();
        if removed {
            tables.comments.retain(|c| c.post_slug != slug);
        }
        Ok(removed)
    }

    async fn ensure_post(&self, slug: &str, placeholder: &PostInput) -> StoreResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        tables
            .posts
            .entry(slug.to_string())
            .or_insert_with(|| placeholder.clone().into_post(slug));
        Ok(())
    }

    async fn find_counters(&self, slug: &str) -> StoreResult<Option<PostCounters>> {
        self.check_available()?;
        Ok(self.tables.read().await.posts.get(slug).map(|p| PostCounters {
            views: p.views,
            likes: p.likes,
        }))
    }

    async fn increment_views(&self, slug: &str) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        Ok(match tables.posts.get_mut(slug) {
            Some(post) => {
                post.views += 1;
                true
            }
            None => false,
        })
    }

    async fn increment_likes(&self, slug: &str) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        Ok(match tables.posts.get_mut(slug) {
            Some(post) if post.likes < post.views => {
                post.likes += 1;
                true
            }
            _ => false,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}

#[async_trait]
impl BaseCommentStore for MemoryStore {
    async fn list_comments(&self, post_slug: &str) -> StoreResult<Vec<Comment>> {
        self.check_available()?;
        Ok(self
            .tables
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.post_slug == post_slug)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<Comment> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&comment.post_slug) {
            return Err(StoreError::MissingParent {
                entity: "post",
                key: comment.post_slug.clone(),
            });
        }
        let stored = Comment {
            id: CommentId::new(),
            post_slug: comment.post_slug.clone(),
            author: comment.author.clone(),
            text: comment.text.clone(),
            created_at: Utc::now(),
        };
        tables.comments.push(stored.clone());
        Ok(stored)
    }

    async fn delete_comment(&self, post_slug: &str, id: CommentId) -> StoreResult<bool> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables
            .comments
            .retain(|c| !(c.id == id && c.post_slug == post_slug));
        Ok(tables.comments.len() < before)
    }
}
