// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business rules (slug derivation, the likes <= views bound, comment defaults)
// live in the domain actions that call these traits.
//
// Naming convention: Base* for trait names (e.g., BasePostStore)

use async_trait::async_trait;

use crate::common::CommentId;
use crate::domains::engagement::models::{Comment, NewComment, PostCounters};
use crate::domains::posts::models::{Post, PostInput, PostSummary};
use crate::kernel::StoreResult;

// =============================================================================
// Post table
// =============================================================================

#[async_trait]
pub trait BasePostStore: Send + Sync {
    /// All posts, newest `date` first.
    async fn list_post_summaries(&self) -> StoreResult<Vec<PostSummary>>;

    /// All post slugs, in the same order as `list_post_summaries`.
    async fn list_post_slugs(&self) -> StoreResult<Vec<String>>;

    async fn find_post(&self, slug: &str) -> StoreResult<Option<Post>>;

    /// Insert a new post with zeroed counters.
    ///
    /// Fails with `StoreError::Conflict` if the slug is taken.
    async fn insert_post(&self, slug: &str, input: &PostInput) -> StoreResult<Post>;

    /// Overwrite the editable fields. Returns `None` if no row matched.
    async fn update_post(&self, slug: &str, input: &PostInput) -> StoreResult<Option<Post>>;

    /// Delete a post and its comments. Returns `false` if no row matched.
    async fn delete_post(&self, slug: &str) -> StoreResult<bool>;

    /// Insert `placeholder` under `slug` unless a row already exists.
    async fn ensure_post(&self, slug: &str, placeholder: &PostInput) -> StoreResult<()>;

    async fn find_counters(&self, slug: &str) -> StoreResult<Option<PostCounters>>;

    /// Atomically add one view. Returns `false` if no row matched.
    async fn increment_views(&self, slug: &str) -> StoreResult<bool>;

    /// Atomically add one like, only while `likes < views`.
    ///
    /// Returns `false` when the row is missing or the bound blocked the write.
    async fn increment_likes(&self, slug: &str) -> StoreResult<bool>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> StoreResult<()>;
}

// =============================================================================
// Comment table
// =============================================================================

#[async_trait]
pub trait BaseCommentStore: Send + Sync {
    /// Comments for a post, oldest first.
    async fn list_comments(&self, post_slug: &str) -> StoreResult<Vec<Comment>>;

    /// Insert a comment; the store assigns `id` and `created_at`.
    ///
    /// Fails with `StoreError::MissingParent` if the post does not exist.
    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<Comment>;

    /// Delete a comment only if it belongs to `post_slug`.
    async fn delete_comment(&self, post_slug: &str, id: CommentId) -> StoreResult<bool>;
}

/// Composite store used by the application.
pub trait BaseBlogStore: BasePostStore + BaseCommentStore {}

impl<T: BasePostStore + BaseCommentStore> BaseBlogStore for T {}

// =============================================================================
// Markdown
// =============================================================================

pub trait BaseMarkdownRenderer: Send + Sync {
    /// Convert markdown source into an HTML fragment.
    fn render(&self, markdown: &str) -> String;
}
