//! Engagement domain - per-post views, likes and comments
//!
//! Responsibilities:
//! - Counting views (creating a placeholder post on first view)
//! - Counting likes, never more than views
//! - Adding and moderating comments

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CommentData, CommentInput, EngagementAction, EngagementRequest, EngagementSnapshot};
pub use models::{Comment, NewComment, PostCounters};
