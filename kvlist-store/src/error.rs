//! Error types returned by the KV Gateway
//!
//! These are the five primitives' failure modes named in spec.md §4.1.
//! Most of them are expected race outcomes that `kvlist-engine` handles
//! locally rather than propagating; see spec.md §7.

use thiserror::Error;

/// Failure modes of the five KV Gateway primitives
#[derive(Error, Debug)]
pub enum StoreError {
    /// `PutIfAbsent` found a key already present
    #[error("item already exists")]
    AlreadyExists,

    /// `Get`/`AppendToList` found no item at that key
    #[error("item not found")]
    NotFound,

    /// `IncrementIfAtLeast`'s floor no longer matched the stored value
    #[error("precondition failed")]
    PreconditionFailed,

    /// A transport or throttling error from the backing store
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Anything else the store surfaced
    #[error("store error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
