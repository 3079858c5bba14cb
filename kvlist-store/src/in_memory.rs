//! A reference [`KvStore`] implementation, backed by a guarded `HashMap`
//!
//! This stands in for the real KV-store SDK that spec.md places out of
//! scope. It is used by every test in this workspace and by
//! `kvlist-cli`. Its locking is internal bookkeeping for this mock, not
//! part of the append/retrieval protocol: the protocol itself never
//! takes a lock.

use std::collections::HashMap;

use async_trait::async_trait;
use kvlist_core::model::StoreItem;
use kvlist_core::types::Value;
use parking_lot::Mutex;

use crate::error::{Result, StoreError};
use crate::gateway::KvStore;

/// An in-process, `parking_lot`-guarded [`KvStore`]
///
/// Table names are accepted but not enforced: all keys share one
/// namespace, partitioned only by the `(table, key)` pair.
#[derive(Default)]
pub struct InMemoryStore {
    items: Mutex<HashMap<(String, String), StoreItem>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn put_if_absent(&self, table: &str, key: &str, item: StoreItem) -> Result<()> {
        let mut items = self.items.lock();
        let slot = (table.to_string(), key.to_string());
        if items.contains_key(&slot) {
            log::debug!("put_if_absent: {key} already exists in {table}");
            return Err(StoreError::AlreadyExists);
        }
        items.insert(slot, item);
        Ok(())
    }

    async fn get(
        &self,
        table: &str,
        key: &str,
        projection: Option<&[&str]>,
    ) -> Result<Option<StoreItem>> {
        let items = self.items.lock();
        let Some(item) = items.get(&(table.to_string(), key.to_string())) else {
            return Ok(None);
        };
        match projection {
            None => Ok(Some(item.clone())),
            Some(fields) => Ok(Some(
                fields
                    .iter()
                    .filter_map(|f| item.get(*f).map(|v| (f.to_string(), v.clone())))
                    .collect(),
            )),
        }
    }

    async fn append_to_list(
        &self,
        table: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> Result<u64> {
        let mut items = self.items.lock();
        let Some(item) = items.get_mut(&(table.to_string(), key.to_string())) else {
            return Err(StoreError::NotFound);
        };
        let list = item
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(elements) = list else {
            return Err(StoreError::Other(format!("{field} is not list-valued")));
        };
        elements.push(value);
        Ok(elements.len() as u64)
    }

    async fn increment_if_at_least(
        &self,
        table: &str,
        key: &str,
        field: &str,
        floor: u64,
    ) -> Result<u64> {
        let mut items = self.items.lock();
        let Some(item) = items.get_mut(&(table.to_string(), key.to_string())) else {
            return Err(StoreError::NotFound);
        };
        let current = item.get(field).and_then(Value::as_u64).unwrap_or(0);
        if current != floor {
            log::debug!(
                "increment_if_at_least: {key}.{field} is {current}, floor {floor} stale"
            );
            return Err(StoreError::PreconditionFailed);
        }
        let next = current + 1;
        item.insert(field.to_string(), Value::from(next));
        Ok(next)
    }

    async fn bulk_get(&self, table: &str, keys: &[String]) -> Result<HashMap<String, StoreItem>> {
        let items = self.items.lock();
        Ok(keys
            .iter()
            .filter_map(|k| {
                items
                    .get(&(table.to_string(), k.clone()))
                    .map(|item| (k.clone(), item.clone()))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvlist_core::model::StoreItem;

    fn item(fields: &[(&str, Value)]) -> StoreItem {
        fields.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[tokio::test]
    async fn put_if_absent_rejects_duplicate_key() {
        let store = InMemoryStore::new();
        store
            .put_if_absent("t", "k", item(&[("id", Value::from("k"))]))
            .await
            .unwrap();
        let err = store
            .put_if_absent("t", "k", item(&[("id", Value::from("k"))]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists));
    }

    #[tokio::test]
    async fn append_to_list_requires_existing_item() {
        let store = InMemoryStore::new();
        let err = store
            .append_to_list("t", "missing", "dataList", Value::from("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn append_to_list_returns_new_length() {
        let store = InMemoryStore::new();
        store.put_if_absent("t", "k", item(&[])).await.unwrap();
        let n1 = store
            .append_to_list("t", "k", "dataList", Value::from("a"))
            .await
            .unwrap();
        let n2 = store
            .append_to_list("t", "k", "dataList", Value::from("b"))
            .await
            .unwrap();
        assert_eq!((n1, n2), (1, 2));
    }

    #[tokio::test]
    async fn increment_if_at_least_enforces_floor() {
        let store = InMemoryStore::new();
        store
            .put_if_absent("t", "k", item(&[("currentPage", Value::from(0u64))]))
            .await
            .unwrap();
        let next = store
            .increment_if_at_least("t", "k", "currentPage", 0)
            .await
            .unwrap();
        assert_eq!(next, 1);
        let err = store
            .increment_if_at_least("t", "k", "currentPage", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::PreconditionFailed));
    }

    #[tokio::test]
    async fn bulk_get_omits_missing_keys() {
        let store = InMemoryStore::new();
        store.put_if_absent("t", "a", item(&[])).await.unwrap();
        let found = store
            .bulk_get("t", &["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert!(found.contains_key("a"));
    }
}
