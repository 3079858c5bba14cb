//! The Page Model: in-memory shape of summary and data pages
//!
//! Encodes and decodes [`Summary`] and [`Page`] to/from the generic
//! attribute-map shape ([`StoreItem`]) that the KV Gateway speaks. This
//! module has no behavior beyond shape, defaults, and codec.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::Constants;
use crate::types::{ListId, PageNumber, Value};

/// Schema version written by this implementation
pub const SCHEMA_VERSION: u32 = 1;

/// The generic item shape the KV Gateway reads and writes
///
/// Mirrors an attribute map in the backing store: a flat set of named
/// fields, one of which (`data_list`) is itself list-valued.
pub type StoreItem = HashMap<String, Value>;

/// The single metadata item for one list, key `<listId>_summary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub v: u32,
    pub current_page: PageNumber,
    pub metadata: Option<Value>,
    pub submitted_at: u64,
}

impl Summary {
    /// A fresh summary for a newly created list: `current_page = 0`
    pub fn fresh(list_id: &ListId, metadata: Option<Value>, submitted_at: u64) -> Self {
        Self {
            id: Constants::summary_key(list_id),
            v: SCHEMA_VERSION,
            current_page: 0,
            metadata,
            submitted_at,
        }
    }

    pub fn into_store_item(self) -> StoreItem {
        let mut item = StoreItem::new();
        item.insert("id".into(), Value::String(self.id));
        item.insert("v".into(), Value::from(self.v));
        item.insert("currentPage".into(), Value::from(self.current_page));
        item.insert(
            "metadata".into(),
            self.metadata.unwrap_or(Value::Null),
        );
        item.insert("submittedAt".into(), Value::from(self.submitted_at));
        item
    }

    pub fn from_store_item(item: &StoreItem) -> Option<Self> {
        Some(Self {
            id: item.get("id")?.as_str()?.to_string(),
            v: item.get("v").and_then(Value::as_u64).unwrap_or(SCHEMA_VERSION as u64) as u32,
            current_page: item.get("currentPage")?.as_u64()?,
            metadata: item.get("metadata").cloned().filter(|v| !v.is_null()),
            submitted_at: item.get("submittedAt").and_then(Value::as_u64).unwrap_or(0),
        })
    }
}

/// One data page, key `<listId>_<pageNumber>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub v: u32,
    pub data_list: Vec<Value>,
    pub submitted_at: u64,
}

impl Page {
    /// A fresh, empty data page
    pub fn fresh(list_id: &ListId, page_number: PageNumber, submitted_at: u64) -> Self {
        Self {
            id: Constants::page_key(list_id, page_number),
            v: SCHEMA_VERSION,
            data_list: Vec::new(),
            submitted_at,
        }
    }

    pub fn into_store_item(self) -> StoreItem {
        let mut item = StoreItem::new();
        item.insert("id".into(), Value::String(self.id));
        item.insert("v".into(), Value::from(self.v));
        item.insert("dataList".into(), Value::Array(self.data_list));
        item.insert("submittedAt".into(), Value::from(self.submitted_at));
        item
    }

    pub fn from_store_item(item: &StoreItem) -> Option<Self> {
        Some(Self {
            id: item.get("id")?.as_str()?.to_string(),
            v: item.get("v").and_then(Value::as_u64).unwrap_or(SCHEMA_VERSION as u64) as u32,
            data_list: item
                .get("dataList")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            submitted_at: item.get("submittedAt").and_then(Value::as_u64).unwrap_or(0),
        })
    }
}
