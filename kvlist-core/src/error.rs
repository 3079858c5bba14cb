//! Error types for kvlist
//!
//! This module defines the error types used throughout kvlist.

use thiserror::Error;

/// The main error type for kvlist protocol operations
#[derive(Error, Debug)]
pub enum KvListError {
    /// The append-then-create-page recovery path failed after its one retry
    #[error("could not create page {page} for list {list_id} after the append recovery retry")]
    CreateNewPage { list_id: String, page: u64 },

    /// The underlying KV store returned a transport/availability error
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The list (its summary item) has not been created
    #[error("list {0} has no summary item")]
    PageNotFound(String),

    /// A cursor was missing `page_id` or `sequence_id`
    #[error("cursor is missing page_id or sequence_id")]
    InvalidCursor,

    /// The entry point exists in the callable surface but is intentionally unimplemented
    #[error("not implemented")]
    NotImplemented,

    /// Anything else the propagation policy says surfaces unchanged
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for kvlist protocol operations
pub type Result<T> = std::result::Result<T, KvListError>;
