use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    Json,
};
use serde::Deserialize;

use crate::domains::auth::AuthError;
use crate::domains::engagement::{actions, EngagementRequest, EngagementSnapshot};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthEditor;

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    slug: Option<String>,
}

/// GET /engagement?slug=<slug>
pub async fn engagement_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<SlugQuery>, QueryRejection>,
) -> Result<Json<EngagementSnapshot>, ApiError> {
    let Query(query) = query?;
    let slug = query
        .slug
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Slug is required".to_string()))?;

    let snapshot = actions::get_engagement(&slug, &state.server_deps).await?;
    Ok(Json(snapshot))
}

/// POST /engagement
///
/// Body: `{slug, action: view|like|comment|delete-comment, payload?}`.
/// Returns the refreshed snapshot. `delete-comment` needs an editor token.
pub async fn engagement_action_handler(
    Extension(state): Extension<AxumAppState>,
    editor: Option<Extension<AuthEditor>>,
    payload: Result<Json<EngagementRequest>, JsonRejection>,
) -> Result<Json<EngagementSnapshot>, ApiError> {
    let Json(request) = payload?;
    if request.requires_editor() && editor.is_none() {
        return Err(AuthError::AuthenticationRequired.into());
    }

    let (slug, action) = request.into_parts()?;

    let snapshot = actions::apply_action(&slug, action, &state.server_deps).await?;
    Ok(Json(snapshot))
}
