//! The public callable surface of kvlist (spec.md §6)
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use kvlist_client::PagedListClient;
//! use kvlist_core::config::Configuration;
//! use kvlist_core::types::Value;
//! use kvlist_store::InMemoryStore;
//!
//! # async fn run() -> kvlist_core::error::Result<()> {
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

pub mod client;

pub use client::{ConstantsInfo, PagedListClient};
