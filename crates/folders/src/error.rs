//! Error types for folder operations

use thiserror::Error;

/// Errors surfaced by the folders crate
///
/// Rendering never fails; these cover loading inputs (language packs,
/// seed state) and store access.
#[derive(Debug, Error)]
pub enum FolderError {
    #[error("unknown language pack: {0}")]
    UnknownLanguage(String),

    #[error("malformed language pack {code}: {source}")]
    MalformedLanguage {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown limit key: {0}")]
    UnknownLimit(String),

    #[error("invalid state file: {0}")]
    InvalidState(String),

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FolderError>;
