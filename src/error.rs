//! Errors surfaced by tree operations.

use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in tree operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The key is empty and cannot be branched on.
    #[error("invalid key: keys must contain at least one byte")]
    InvalidKey,

    /// No terminal node exists for the requested key.
    #[error("key not found")]
    KeyNotFound,
}

/// Rejects keys that cannot be stored in the tree.
pub(crate) fn validate_key(key: &[u8]) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }
    Ok(())
}
