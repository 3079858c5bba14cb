//! kvlist: an append-only, horizontally scalable logical list layered on
//! a remote key-value store offering strongly-consistent reads/writes,
//! conditional puts, and atomic per-attribute numeric increments.
//!
//! This crate is a thin facade over the workspace's components:
//!
//! - [`kvlist_core`] — shared types, errors, the Page Model, and
//!   configuration
//! - [`kvlist_store`] — the KV Gateway trait and the in-memory
//!   reference implementation
//! - [`kvlist_client`] — [`PagedListClient`], the callable surface
//!
//! The append/page-rollover protocol and the reverse multi-page
//! retrieval engine (the hard parts) live in `kvlist-engine`, which
//! `kvlist-client` builds on; most callers only need this crate.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use kvlist::{Configuration, InMemoryStore, PagedListClient, Value};
//!
//! # async fn run() -> kvlist::Result<()> {
//! let configuration = Configuration::builder()
//!     .store("us-east-1", "lists")
//!     .max_element_per_page(50)
//!     .build();
//! let client = PagedListClient::new(Arc::new(InMemoryStore::new()), configuration);
//!
//! let list_id = "orders".to_string();
//! client.idempotent_create(&list_id, None).await?;
//! client.atomic_append(&list_id, Value::from("order-1")).await?;
//! let recent = client.retrieve_last_most_recent(&list_id, 10).await?;
//! # let _ = recent;
//! # Ok(())
//! # }
//! ```

pub use kvlist_client::{ConstantsInfo, PagedListClient};
pub use kvlist_core::config::Configuration;
pub use kvlist_core::error::{KvListError, Result};
pub use kvlist_core::types::{Cursor, Item, ListId, PageNumber, RawCursor, SequenceId, Value};
pub use kvlist_store::{InMemoryStore, KvStore, StoreError};
