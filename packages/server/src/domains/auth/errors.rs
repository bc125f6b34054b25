use thiserror::Error;

/// Authentication errors for editor access
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token encoding failed: {0}")]
    Token(#[source] jsonwebtoken::errors::Error),
}
