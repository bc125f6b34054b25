// HTTP routes
pub mod auth;
pub mod engagement;
pub mod health;
pub mod posts;

pub use auth::*;
pub use engagement::*;
pub use health::*;
pub use posts::*;
