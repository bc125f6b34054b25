//! PostgreSQL storage implementation.
//!
//! Counter updates are single conditional statements so concurrent requests
//! never lose an increment and never push `likes` past `views`.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;

use crate::common::CommentId;
use crate::domains::engagement::models::{Comment, NewComment, PostCounters};
use crate::domains::posts::models::{Post, PostInput, PostSummary};
use crate::kernel::{BaseCommentStore, BasePostStore, StoreError, StoreResult};

const POST_COLUMNS: &str = "slug, title, date, author, summary, content, views, likes";
const COMMENT_COLUMNS: &str = "id, post_slug, author, text, created_at";

/// Blog tables backed by a Postgres pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map constraint violations onto typed store errors.
fn classify(err: sqlx::Error, entity: &'static str, key: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict {
                entity,
                key: key.to_string(),
            };
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::MissingParent {
                entity,
                key: key.to_string(),
            };
        }
    }
    err.into()
}

#[async_trait]
impl BasePostStore for PostgresStore {
    async fn list_post_summaries(&self) -> StoreResult<Vec<PostSummary>> {
        sqlx::query_as::<_, PostSummary>(
            "SELECT slug, title, date, author, summary FROM posts ORDER BY date DESC, slug ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn list_post_slugs(&self) -> StoreResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM posts ORDER BY date DESC, slug ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_post(&self, slug: &str) -> StoreResult<Option<Post>> {
        sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn insert_post(&self, slug: &str, input: &PostInput) -> StoreResult<Post> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (slug, title, date, author, summary, content, views, likes)
            VALUES ($1, $2, $3, $4, $5, $6, 0, 0)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(slug)
        .bind(&input.title)
        .bind(input.date)
        .bind(&input.author)
        .bind(&input.summary)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "post", slug))
    }

    async fn update_post(&self, slug: &str, input: &PostInput) -> StoreResult<Option<Post>> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET title = $2, date = $3, author = $4, summary = $5, content = $6
            WHERE slug = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(slug)
        .bind(&input.title)
        .bind(input.date)
        .bind(&input.author)
        .bind(&input.summary)
        .bind(&input.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn delete_post(&self, slug: &str) -> StoreResult<bool> {
        // comments.post_slug is ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM posts WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ensure_post(&self, slug: &str, placeholder: &PostInput) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO posts (slug, title, date, author, summary, content, views, likes)
            VALUES ($1, $2, $3, $4, $5, $6, 0, 0)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(slug)
        .bind(&placeholder.title)
        .bind(placeholder.date)
        .bind(&placeholder.author)
        .bind(&placeholder.summary)
        .bind(&placeholder.content)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            debug!(slug = %slug, "Inserted placeholder post");
        }
        Ok(())
    }

    async fn find_counters(&self, slug: &str) -> StoreResult<Option<PostCounters>> {
        sqlx::query_as::<_, PostCounters>("SELECT views, likes FROM posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn increment_views(&self, slug: &str) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE posts SET views = views + 1 WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment_likes(&self, slug: &str) -> StoreResult<bool> {
        let result =
            sqlx::query("UPDATE posts SET likes = likes + 1 WHERE slug = $1 AND likes < views")
                .bind(slug)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BaseCommentStore for PostgresStore {
    async fn list_comments(&self, post_slug: &str) -> StoreResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_slug = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(post_slug)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn insert_comment(&self, comment: &NewComment) -> StoreResult<Comment> {
        sqlx::query_as::<_, Comment>(&format!(
            r#"
            INSERT INTO comments (post_slug, author, text)
            VALUES ($1, $2, $3)
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(&comment.post_slug)
        .bind(&comment.author)
        .bind(&comment.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "post", &comment.post_slug))
    }

    async fn delete_comment(&self, post_slug: &str, id: CommentId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND post_slug = $2")
            .bind(id)
            .bind(post_slug)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
