//! Posts domain - the post repository
//!
//! Responsibilities:
//! - Listing and fetching posts (markdown rendered on read)
//! - Creating posts under title-derived slugs
//! - Editing and deleting posts (comments go with them)

pub mod actions;
pub mod data;
pub mod models;

pub use data::{PostData, PostForm, PostSummaryData};
pub use models::{Post, PostInput, PostSummary};
