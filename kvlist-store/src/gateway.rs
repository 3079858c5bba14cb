//! The KV Gateway: the five primitives the append/retrieval protocol is
//! built on, and nothing else.
//!
//! Isolating the gateway behind this trait is what lets the protocol in
//! `kvlist-engine` stay store-agnostic: any implementation that can
//! honor these five contracts (a real DynamoDB-like service, a SQL table
//! with an `id` primary key, the in-memory reference implementation in
//! this crate) can back a [`kvlist_engine`]-driven list.

use std::collections::HashMap;

use async_trait::async_trait;
use kvlist_core::model::StoreItem;
use kvlist_core::types::Value;

use crate::error::Result;

/// The KV-store façade the append/retrieval protocol depends on
///
/// Every method is one network round trip against the backing store;
/// there is no batching or pipelining across calls.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Create `item` at `key` in `table` if no item exists there yet
    ///
    /// Returns [`crate::error::StoreError::AlreadyExists`] if the key is
    /// already present; the item is left untouched in that case (no
    /// overwrite).
    async fn put_if_absent(&self, table: &str, key: &str, item: StoreItem) -> Result<()>;

    /// Read the item at `key` in `table`
    ///
    /// `projection`, when given, limits the returned item to those
    /// fields (e.g. fetching only `dataList` for a data page read).
    /// Returns `Ok(None)` if no item exists — callers decide whether a
    /// missing item is an error or an expected race artifact.
    async fn get(
        &self,
        table: &str,
        key: &str,
        projection: Option<&[&str]>,
    ) -> Result<Option<StoreItem>>;

    /// Atomically append `value` to the list-valued attribute `field` of
    /// the item at `key`, returning the new length
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if the item does
    /// not exist yet.
    async fn append_to_list(
        &self,
        table: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> Result<u64>;

    /// Atomically advance the numeric attribute `field` from `floor` to
    /// `floor + 1`, returning the new value
    ///
    /// Returns [`crate::error::StoreError::PreconditionFailed`] if the
    /// store's current value is not `floor` (a peer already advanced
    /// it). This precise conditional form — not a blind increment — is
    /// what guarantees a single winner per page-rollover boundary.
    async fn increment_if_at_least(
        &self,
        table: &str,
        key: &str,
        field: &str,
        floor: u64,
    ) -> Result<u64>;

    /// Read every item among `keys` in `table` that exists
    ///
    /// Missing keys are silently omitted from the result; a bulk get
    /// that finds nothing is still a success.
    async fn bulk_get(&self, table: &str, keys: &[String]) -> Result<HashMap<String, StoreItem>>;
}
