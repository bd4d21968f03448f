use thiserror::Error;

use crate::models::ItemKind;

/// Errors reported by store mutations.
///
/// Both kinds are recoverable: a rejected mutation leaves the store exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: ItemKind, id: String },
}

impl StoreError {
    pub fn empty_name() -> Self {
        StoreError::Validation(String::from("name must not be empty"))
    }

    pub fn not_found(kind: ItemKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
