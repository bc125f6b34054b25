//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container passed to every
//! action. The store and markdown renderer are trait objects so tests can
//! swap in `MemoryStore`.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::{EditorCredentials, JwtService};
use crate::kernel::{BaseBlogStore, BaseMarkdownRenderer, MemoryStore, PostgresStore, PulldownMarkdownRenderer};

/// Server dependencies accessible to actions and HTTP handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseBlogStore>,
    pub markdown: Arc<dyn BaseMarkdownRenderer>,
    /// JWT service for editor token creation and verification
    pub jwt_service: Arc<JwtService>,
    pub editor_credentials: Arc<EditorCredentials>,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseBlogStore>,
        markdown: Arc<dyn BaseMarkdownRenderer>,
        jwt_service: Arc<JwtService>,
        editor_credentials: Arc<EditorCredentials>,
    ) -> Self {
        Self {
            store,
            markdown,
            jwt_service,
            editor_credentials,
        }
    }

    /// Production wiring: Postgres tables and the pulldown-cmark renderer.
    pub fn postgres(
        pool: PgPool,
        jwt_secret: &str,
        jwt_issuer: String,
        editor_password: &str,
    ) -> Self {
        Self::new(
            Arc::new(PostgresStore::new(pool)),
            Arc::new(PulldownMarkdownRenderer::new()),
            Arc::new(JwtService::new(jwt_secret, jwt_issuer)),
            Arc::new(EditorCredentials::new(editor_password)),
        )
    }

    /// In-memory wiring for tests and local experiments.
    ///
    /// Returns the store handle too so callers can inspect or break it.
    pub fn in_memory(editor_password: &str) -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let deps = Self::new(
            store.clone(),
            Arc::new(PulldownMarkdownRenderer::new()),
            Arc::new(JwtService::new("in-memory-secret", "blog-server".to_string())),
            Arc::new(EditorCredentials::new(editor_password)),
        );
        (deps, store)
    }
}
