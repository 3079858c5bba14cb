//! The KV Gateway
//!
//! This crate isolates the five primitives the append/page-rollover
//! protocol depends on ([`gateway::KvStore`]) from the protocol itself,
//! and ships one reference implementation ([`in_memory::InMemoryStore`])
//! for tests and local use.

pub mod error;
pub mod gateway;
pub mod in_memory;

pub use error::{Result, StoreError};
pub use gateway::KvStore;
pub use in_memory::InMemoryStore;
