//! Auth domain - editor authentication
//!
//! Responsibilities:
//! - Checking the editor password server-side
//! - JWT issue and verification for editor sessions

pub mod actions;
pub mod credentials;
pub mod errors;
pub mod jwt;

pub use credentials::EditorCredentials;
pub use errors::AuthError;
pub use jwt::{Claims, JwtService};
