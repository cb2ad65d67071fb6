//! Repository error taxonomy.
//!
//! Lookups that miss surface as [`RepoError::NotFound`] (or [`RepoError::Empty`] for
//! a random pick over nothing), kept apart from storage failures so the web layer
//! can answer 404 for one and 500 for the other.

use thiserror::Error;

pub type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("no {entity} available")]
    Empty { entity: &'static str },

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("corrupt list column {column}: {source}")]
    Decode {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),

    #[error("database lock poisoned")]
    Poisoned,
}

/// Coarse classification used by callers that map errors onto responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Storage,
    Unsupported,
}

impl RepoError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::Empty { .. } => ErrorKind::NotFound,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::Storage(_) | Self::Decode { .. } | Self::Integrity(_) | Self::Poisoned => {
                ErrorKind::Storage
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_a_not_found_kind() {
        let err = RepoError::Empty { entity: "quote" };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no quote available");
    }

    #[test]
    fn storage_errors_are_not_not_found() {
        let err = RepoError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = RepoError::not_found("philosopher", "plato");
        assert_eq!(err.to_string(), "philosopher not found: plato");
        assert_eq!(RepoError::Unsupported("search").kind(), ErrorKind::Unsupported);
    }
}
