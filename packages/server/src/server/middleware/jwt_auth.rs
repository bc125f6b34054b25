use crate::domains::auth::{AuthError, JwtService};
use crate::server::error::ApiError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Authenticated editor information from JWT
#[derive(Clone, Debug)]
pub struct AuthEditor {
    pub subject: String,
}

/// JWT authentication middleware
///
/// Extracts JWT token from Authorization header, verifies it, and adds AuthEditor to request extensions.
/// If no token or invalid token, request continues without AuthEditor (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(editor) = extract_auth_editor(&request, &jwt_service) {
        debug!(subject = %editor.subject, "Authenticated editor");
        request.extensions_mut().insert(editor);
    }

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_editor(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthEditor> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;
    if !claims.editor {
        return None;
    }

    Some(AuthEditor {
        subject: claims.sub,
    })
}

/// Extractor for editor-only handlers; rejects with 401 when no editor token
/// was accepted by `jwt_auth_middleware`.
#[derive(Clone, Debug)]
pub struct RequireEditor(pub AuthEditor);

#[async_trait]
impl<S> FromRequestParts<S> for RequireEditor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthEditor>()
            .cloned()
            .map(RequireEditor)
            .ok_or_else(|| AuthError::AuthenticationRequired.into())
    }
}
