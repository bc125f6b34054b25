// Blog API - Core
//
// Backend for a small markdown blog: a post repository keyed by slug,
// per-post engagement (views, likes, comments) and editor login.
//
// Business logic lives in domains/*/actions; storage sits behind the
// traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
