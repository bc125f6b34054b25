use thiserror::Error;

use crate::kernel::StoreError;

/// Errors returned by post and engagement actions
#[derive(Error, Debug)]
pub enum BlogError {
    /// Input rejected before any store call
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BlogError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type BlogResult<T> = std::result::Result<T, BlogError>;
