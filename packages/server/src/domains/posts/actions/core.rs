//! Post CRUD actions - entry-point functions for post operations
//!
//! These are called directly from the HTTP routes. Actions take parsed
//! input, talk to the store through `ServerDeps`, and return final models.

use tracing::{error, info};

use crate::common::utils::generate_slug;
use crate::common::{BlogError, BlogResult};
use crate::domains::posts::data::PostData;
use crate::domains::posts::models::{Post, PostInput, PostSummary};
use crate::kernel::ServerDeps;

/// All posts for the index page, newest first.
///
/// Store failures are logged and yield an empty list.
pub async fn list_post_summaries(deps: &ServerDeps) -> Vec<PostSummary> {
    match deps.store.list_post_summaries().await {
        Ok(posts) => posts,
        Err(e) => {
            error!(error = %e, "Failed to list posts");
            Vec::new()
        }
    }
}

/// Every slug, for pre-rendering post pages.
///
/// Store failures are logged and yield an empty list.
pub async fn list_post_slugs(deps: &ServerDeps) -> Vec<String> {
    match deps.store.list_post_slugs().await {
        Ok(slugs) => slugs,
        Err(e) => {
            error!(error = %e, "Failed to list post slugs");
            Vec::new()
        }
    }
}

/// Fetch a post and render its markdown. `None` if the slug is unknown.
pub async fn get_post(slug: &str, deps: &ServerDeps) -> BlogResult<Option<PostData>> {
    let Some(post) = deps.store.find_post(slug).await? else {
        return Ok(None);
    };

    let content_html = deps.markdown.render(&post.content);
    Ok(Some(PostData::new(post, content_html)))
}

/// Create a post under a fresh slug derived from its title.
pub async fn create_post(input: PostInput, deps: &ServerDeps) -> BlogResult<Post> {
    let slug = generate_slug(&input.title);
    info!(slug = %slug, title = %input.title, "Creating post");

    let post = deps.store.insert_post(&slug, &input).await?;
    Ok(post)
}

/// Overwrite a post's editable fields.
///
/// Fails with `NotFound` if no post has this slug.
pub async fn update_post(slug: &str, input: PostInput, deps: &ServerDeps) -> BlogResult<Post> {
    require_slug(slug)?;
    info!(slug = %slug, "Updating post");

    deps.store
        .update_post(slug, &input)
        .await?
        .ok_or(BlogError::NotFound("Post"))
}

/// Delete a post together with its comments.
///
/// Fails with `NotFound` if no post has this slug.
pub async fn delete_post(slug: &str, deps: &ServerDeps) -> BlogResult<()> {
    require_slug(slug)?;
    info!(slug = %slug, "Deleting post");

    if deps.store.delete_post(slug).await? {
        Ok(())
    } else {
        Err(BlogError::NotFound("Post"))
    }
}

fn require_slug(slug: &str) -> BlogResult<()> {
    if slug.trim().is_empty() {
        return Err(BlogError::validation("Post ID is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::engagement::models::NewComment;
    use crate::kernel::{BaseCommentStore, StoreError};
    use chrono::NaiveDate;

    fn input(title: &str) -> PostInput {
        PostInput {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            author: "Grace".to_string(),
            summary: "A summary".to_string(),
            content: "## Heading\n\nBody text.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_post_derives_slug_and_zeroes_counters() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let post = create_post(input("Hello, World!"), &deps).await.unwrap();

        let suffix = post.slug.strip_prefix("hello-world-").unwrap();
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
    }

    #[tokio::test]
    async fn test_create_post_with_symbol_title() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let post = create_post(input("!!!"), &deps).await.unwrap();
        assert!(!post.slug.is_empty());
        assert!(post.slug.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_get_post_renders_markdown() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let post = create_post(input("Rendered"), &deps).await.unwrap();

        let data = get_post(&post.slug, &deps).await.unwrap().unwrap();
        assert_eq!(data.id, post.slug);
        assert!(data.content_html.contains("<h2>Heading</h2>"));
        assert_eq!(data.content, "## Heading\n\nBody text.");
    }

    #[tokio::test]
    async fn test_get_missing_post_is_none() {
        let (deps, _) = ServerDeps::in_memory("pw");
        assert!(get_post("nope", &deps).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_summaries_empty_on_store_failure() {
        let (deps, store) = ServerDeps::in_memory("pw");
        create_post(input("One"), &deps).await.unwrap();
        store.set_unavailable(true);

        assert!(list_post_summaries(&deps).await.is_empty());
        assert!(list_post_slugs(&deps).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_post_overwrites_fields() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let post = create_post(input("Original"), &deps).await.unwrap();

        let mut changed = input("Renamed");
        changed.content = "new body".to_string();
        let updated = update_post(&post.slug, changed, &deps).await.unwrap();

        assert_eq!(updated.slug, post.slug);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, "new body");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let err = update_post("ghost-1", input("x"), &deps).await.unwrap_err();
        assert!(matches!(err, BlogError::NotFound("Post")));
    }

    #[tokio::test]
    async fn test_delete_post_removes_comments() {
        let (deps, store) = ServerDeps::in_memory("pw");
        let post = create_post(input("Doomed"), &deps).await.unwrap();
        store
            .insert_comment(&NewComment {
                post_slug: post.slug.clone(),
                author: "a".to_string(),
                text: "bye".to_string(),
            })
            .await
            .unwrap();

        delete_post(&post.slug, &deps).await.unwrap();
        assert_eq!(store.post_count().await, 0);
        assert_eq!(store.comment_count().await, 0);

        let err = delete_post(&post.slug, &deps).await.unwrap_err();
        assert!(matches!(err, BlogError::NotFound("Post")));
    }

    #[tokio::test]
    async fn test_delete_requires_slug() {
        let (deps, _) = ServerDeps::in_memory("pw");
        let err = delete_post("  ", &deps).await.unwrap_err();
        assert!(matches!(err, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_post_surfaces_store_failure() {
        let (deps, store) = ServerDeps::in_memory("pw");
        store.set_unavailable(true);
        let err = create_post(input("Offline"), &deps).await.unwrap_err();
        assert!(matches!(err, BlogError::Store(StoreError::Unavailable)));
    }
}
