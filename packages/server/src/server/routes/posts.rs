//! Post repository endpoints.
//!
//! Reads are public; create, update and delete need an editor token.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::posts::{actions, PostData, PostForm, PostSummaryData};
use crate::server::app::AxumAppState;
use crate::server::error::{ApiError, DATABASE_ERROR};
use crate::server::middleware::RequireEditor;

/// Public 500 message for a failed create.
const SAVE_ERROR: &str = "Error saving post";

#[derive(Debug, Deserialize)]
pub struct PostIdQuery {
    id: Option<String>,
}

impl PostIdQuery {
    fn require(self) -> Result<String, ApiError> {
        self.id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Post ID is required".to_string()))
    }
}

#[derive(Serialize)]
pub struct PostsListResponse {
    posts: Vec<PostSummaryData>,
}

#[derive(Serialize)]
pub struct PostIdsResponse {
    ids: Vec<String>,
}

#[derive(Serialize)]
pub struct PostResponse {
    success: bool,
    post: PostData,
}

#[derive(Serialize)]
pub struct MutationResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
}

impl MutationResponse {
    fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            slug: None,
        }
    }
}

/// GET /posts-list
pub async fn posts_list_handler(
    Extension(state): Extension<AxumAppState>,
) -> Json<PostsListResponse> {
    let posts = actions::list_post_summaries(&state.server_deps)
        .await
        .into_iter()
        .map(PostSummaryData::from)
        .collect();

    Json(PostsListResponse { posts })
}

/// GET /post-ids
pub async fn post_ids_handler(Extension(state): Extension<AxumAppState>) -> Json<PostIdsResponse> {
    Json(PostIdsResponse {
        ids: actions::list_post_slugs(&state.server_deps).await,
    })
}

/// GET /post?id=<slug>
pub async fn get_post_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<PostIdQuery>, QueryRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let Query(query) = query?;
    let slug = query.require()?;

    match actions::get_post(&slug, &state.server_deps).await? {
        Some(post) => Ok(Json(PostResponse {
            success: true,
            post,
        })),
        None => Err(ApiError::NotFound("Post not found".to_string())),
    }
}

/// POST /create-post
pub async fn create_post_handler(
    Extension(state): Extension<AxumAppState>,
    RequireEditor(_editor): RequireEditor,
    payload: Result<Json<PostForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(form) = payload?;
    let input = form.into_input()?;

    let post = actions::create_post(input, &state.server_deps)
        .await
        .map_err(|e| ApiError::from_blog(e, SAVE_ERROR))?;

    Ok(Json(MutationResponse {
        success: true,
        message: "Post created",
        slug: Some(post.slug),
    }))
}

/// PUT /post
pub async fn update_post_handler(
    Extension(state): Extension<AxumAppState>,
    RequireEditor(_editor): RequireEditor,
    payload: Result<Json<PostForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(mut form) = payload?;
    let slug = PostIdQuery { id: form.id.take() }.require()?;
    let input = form.into_input()?;

    actions::update_post(&slug, input, &state.server_deps)
        .await
        .map_err(|e| ApiError::from_blog(e, DATABASE_ERROR))?;

    Ok(Json(MutationResponse::ok("Post updated")))
}

/// DELETE /post?id=<slug>
pub async fn delete_post_handler(
    Extension(state): Extension<AxumAppState>,
    RequireEditor(_editor): RequireEditor,
    query: Result<Query<PostIdQuery>, QueryRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Query(query) = query?;
    let slug = query.require()?;

    actions::delete_post(&slug, &state.server_deps).await?;

    Ok(Json(MutationResponse::ok("Post deleted")))
}
