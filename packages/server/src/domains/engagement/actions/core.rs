//! Engagement actions - views, likes and comments scoped by post slug
//!
//! Every mutation is a single store call followed by a fresh read, so the
//! returned snapshot reflects the store at the time of that trailing read.
//! The `likes <= views` bound is enforced inside the store's conditional
//! update, never by comparing values read earlier.

use tracing::{debug, info};

use crate::common::{BlogError, BlogResult, CommentId};
use crate::domains::engagement::data::{CommentInput, EngagementAction, EngagementSnapshot};
use crate::domains::engagement::models::NewComment;
use crate::domains::posts::models::PostInput;
use crate::kernel::{ServerDeps, StoreError};

/// Current counters and comments for a post.
///
/// A slug without a post row reads as zero views, zero likes, no comments.
pub async fn get_engagement(slug: &str, deps: &ServerDeps) -> BlogResult<EngagementSnapshot> {
    let Some(counters) = deps.store.find_counters(slug).await? else {
        return Ok(EngagementSnapshot::default());
    };

    let comments = deps.store.list_comments(slug).await?;
    Ok(EngagementSnapshot::new(counters, comments))
}

/// Record one view, creating a placeholder post row if none exists yet.
pub async fn increment_view(slug: &str, deps: &ServerDeps) -> BlogResult<EngagementSnapshot> {
    deps.store.ensure_post(slug, &PostInput::placeholder()).await?;
    deps.store.increment_views(slug).await?;
    debug!(slug = %slug, "Recorded view");

    get_engagement(slug, deps).await
}

/// Record one like if the post has more views than likes; otherwise no-op.
pub async fn increment_like(slug: &str, deps: &ServerDeps) -> BlogResult<EngagementSnapshot> {
    if deps.store.increment_likes(slug).await? {
        debug!(slug = %slug, "Recorded like");
    } else {
        debug!(slug = %slug, "Like rejected: likes already match views");
    }

    get_engagement(slug, deps).await
}

/// Attach a comment to an existing post.
pub async fn add_comment(
    slug: &str,
    comment: CommentInput,
    deps: &ServerDeps,
) -> BlogResult<EngagementSnapshot> {
    let new_comment = NewComment {
        post_slug: slug.to_string(),
        author: comment.author,
        text: comment.text,
    };

    match deps.store.insert_comment(&new_comment).await {
        Ok(stored) => info!(slug = %slug, comment_id = %stored.id, "Comment added"),
        Err(StoreError::MissingParent { .. }) => return Err(BlogError::NotFound("Post")),
        Err(e) => return Err(e.into()),
    }

    get_engagement(slug, deps).await
}

/// Remove a comment, but only if it belongs to `slug`.
pub async fn delete_comment(
    slug: &str,
    comment_id: CommentId,
    deps: &ServerDeps,
) -> BlogResult<EngagementSnapshot> {
    if deps.store.delete_comment(slug, comment_id).await? {
        info!(slug = %slug, comment_id = %comment_id, "Comment deleted");
    } else {
        debug!(slug = %slug, comment_id = %comment_id, "No matching comment to delete");
    }

    get_engagement(slug, deps).await
}

/// Dispatch a parsed engagement action.
pub async fn apply_action(
    slug: &str,
    action: EngagementAction,
    deps: &ServerDeps,
) -> BlogResult<EngagementSnapshot> {
    match action {
        EngagementAction::View => increment_view(slug, deps).await,
        EngagementAction::Like => increment_like(slug, deps).await,
        EngagementAction::Comment(comment) => add_comment(slug, comment, deps).await,
        EngagementAction::DeleteComment(id) => delete_comment(slug, id, deps).await,
    }
}
