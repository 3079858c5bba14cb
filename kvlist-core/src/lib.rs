//! Core types and traits for kvlist
//!
//! This crate contains the fundamental types and error handling shared by
//! every other kvlist crate. It provides:
//!
//! - Common error types with [`KvListError`] and [`Result`]
//! - Addressing and payload types: [`types::ListId`], [`types::Value`],
//!   [`types::Item`], [`types::Cursor`]
//! - The Page Model: [`model::Summary`] and [`model::Page`]
//! - Explicit, non-global configuration: [`config::Configuration`]
//! - The key-naming [`constants::Constants`]
//!
//! # Example
//!
//! ```
//! use kvlist_core::types::{ListId, Value};
//!
//! let list_id: ListId = "orders".to_string();
//! let value: Value = Value::from("Hello0");
//! ```

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod types;

pub use config::Configuration;
pub use error::{KvListError, Result};
pub use types::*;
