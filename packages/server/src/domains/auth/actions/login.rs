//! Editor login action

use tracing::{info, warn};

use crate::domains::auth::AuthError;
use crate::kernel::ServerDeps;

/// Subject recorded in editor tokens.
pub const EDITOR_SUBJECT: &str = "editor";

/// Check the editor password and issue a session token.
pub fn login(password: &str, deps: &ServerDeps) -> Result<String, AuthError> {
    if !deps.editor_credentials.verify(password) {
        warn!("Editor login rejected");
        return Err(AuthError::InvalidCredentials);
    }

    let token = deps.jwt_service.create_editor_token(EDITOR_SUBJECT)?;
    info!("Editor logged in");
    Ok(token)
}
