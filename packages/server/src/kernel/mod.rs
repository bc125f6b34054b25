//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod error;
pub mod markdown;
pub mod stores;
pub mod traits;

pub use deps::ServerDeps;
pub use error::{StoreError, StoreResult};
pub use markdown::PulldownMarkdownRenderer;
pub use stores::{MemoryStore, PostgresStore};
pub use traits::*;
