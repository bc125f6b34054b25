use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::auth::actions;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    success: bool,
    token: String,
}

/// POST /auth/login
///
/// Exchanges the editor password for a bearer token.
pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    let password = request
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    let token = actions::login(&password, &state.server_deps)?;
    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
