// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The slug another product already holds, when this is a slug conflict.
    pub fn conflicting_slug(&self) -> Option<&str> {
        match self {
            Self::Domain(DomainError::SlugConflict(slug)) => Some(slug),
            _ => None,
        }
    }
}
