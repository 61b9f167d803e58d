//! Fatal load errors

use thiserror::Error;

use crate::entity::PoolExhausted;

/// Errors that abort a load; the level must be treated as not loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("unexpected end of entity data inside a record (line {line})")]
    UnexpectedEof { line: usize },

    #[error("closing brace without data (line {line})")]
    BraceWithoutData { line: usize },

    #[error("found '{found}' when expecting {{ (line {line})")]
    ExpectedOpenBrace { found: String, line: usize },

    #[error("entity pool exhausted (capacity {capacity})")]
    PoolExhausted { capacity: usize },
}

impl From<PoolExhausted> for LoadError {
    fn from(e: PoolExhausted) -> Self {
        LoadError::PoolExhausted {
            capacity: e.capacity,
        }
    }
}
