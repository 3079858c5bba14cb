//! The Append Engine: `idempotentCreate`, `atomicAppend`, and the
//! page-rollover CAS dance (spec.md §4.3)
//!
//! The append path is the cheap hot path: one read of the summary plus
//! one atomic list-append. Rollover is the rare cold path and the only
//! one that writes the summary, which keeps the summary out of the
//! per-append critical section.

use std::sync::Arc;

use kvlist_core::clock::now_millis;
use kvlist_core::constants::Constants;
use kvlist_core::error::{KvListError, Result};
use kvlist_core::model::{Page, Summary};
use kvlist_core::types::{ListId, PageNumber, SequenceId, Value};
use kvlist_store::{KvStore, StoreError};

/// Field name of the summary's page counter, as written on the wire
const FIELD_CURRENT_PAGE: &str = "currentPage";
/// Field name of a page's element list, as written on the wire
const FIELD_DATA_LIST: &str = "dataList";

/// The append-then-create-page recovery path retries at most this many
/// times before surfacing [`KvListError::CreateNewPage`] (spec.md §9:
/// "more retries risk obscuring a real store failure")
pub const MAX_CREATE_RETRIES: u32 = 1;

/// Implements `IdempotentCreate` and `AtomicAppend` against any [`KvStore`]
pub struct AppendEngine<S: KvStore> {
    store: Arc<S>,
    table: String,
    max_element_per_page: usize,
}

impl<S: KvStore> AppendEngine<S> {
    pub fn new(store: Arc<S>, table: impl Into<String>, max_element_per_page: usize) -> Self {
        Self {
            store,
            table: table.into(),
            max_element_per_page,
        }
    }

    /// Creates the summary item for `list_id`, idempotently
    ///
    /// Repeated calls are safe: an `AlreadyExists` from the store is
    /// treated as success, and the caller still gets back a usable
    /// summary view with `current_page = 0` — the first call's metadata
    /// wins, later calls' metadata is ignored (it was never written).
    pub async fn idempotent_create(
        &self,
        list_id: &ListId,
        metadata: Option<Value>,
    ) -> Result<Summary> {
        let summary = Summary::fresh(list_id, metadata, now_millis());
        match self
            .store
            .put_if_absent(&self.table, &summary.id, summary.clone().into_store_item())
            .await
        {
            Ok(()) => Ok(summary),
            Err(StoreError::AlreadyExists) => {
                log::debug!("idempotent_create: {list_id} summary already exists");
                Ok(Summary::fresh(list_id, None, 0))
            }
            Err(e) => Err(map_store_err(e)),
        }
    }

    /// Appends `value` to `list_id`, rolling over to a new page if this
    /// append filled the current one
    ///
    /// Not idempotent: a caller retrying a failed call after a partial
    /// success may produce a duplicate (spec.md §4.3).
    pub async fn atomic_append(
        &self,
        list_id: &ListId,
        value: Value,
    ) -> Result<(PageNumber, SequenceId)> {
        let p = self.read_current_page(list_id).await?;
        let n = self.append_with_recovery(list_id, p, value).await?;

        if n as usize >= self.max_element_per_page {
            self.try_rollover(list_id, p).await?;
        }

        Ok((p, n - 1))
    }

    async fn read_current_page(&self, list_id: &ListId) -> Result<PageNumber> {
        let key = Constants::summary_key(list_id);
        let item = self
            .store
            .get(&self.table, &key, None)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| KvListError::PageNotFound(list_id.clone()))?;
        let summary = Summary::from_store_item(&item)
            .ok_or_else(|| KvListError::Other(format!("malformed summary for {list_id}")))?;
        Ok(summary.current_page)
    }

    /// Step 2-3 of spec.md §4.3: append, and on `ItemMissing` create the
    /// page and retry exactly [`MAX_CREATE_RETRIES`] time(s)
    async fn append_with_recovery(
        &self,
        list_id: &ListId,
        page: PageNumber,
        value: Value,
    ) -> Result<u64> {
        let key = Constants::page_key(list_id, page);
        match self
            .store
            .append_to_list(&self.table, &key, FIELD_DATA_LIST, value.clone())
            .await
        {
            Ok(n) => Ok(n),
            Err(StoreError::NotFound) => {
                log::debug!("append_with_recovery: page {page} missing for {list_id}, creating");
                self.create_page(list_id, page).await?;
                match self
                    .store
                    .append_to_list(&self.table, &key, FIELD_DATA_LIST, value)
                    .await
                {
                    Ok(n) => Ok(n),
                    Err(StoreError::NotFound) => Err(KvListError::CreateNewPage {
                        list_id: list_id.clone(),
                        page,
                    }),
                    Err(e) => Err(map_store_err(e)),
                }
            }
            Err(e) => Err(map_store_err(e)),
        }
    }

    /// `CreatePage(listId, p)`: `AlreadyExists` is swallowed
    async fn create_page(&self, list_id: &ListId, page: PageNumber) -> Result<()> {
        let fresh = Page::fresh(list_id, page, now_millis());
        match self
            .store
            .put_if_absent(&self.table, &fresh.id, fresh.into_store_item())
            .await
        {
            Ok(()) | Err(StoreError::AlreadyExists) => Ok(()),
            Err(e) => Err(map_store_err(e)),
        }
    }

    /// Step 4 of spec.md §4.3: the single-winner rollover
    async fn try_rollover(&self, list_id: &ListId, page: PageNumber) -> Result<()> {
        let key = Constants::summary_key(list_id);
        match self
            .store
            .increment_if_at_least(&self.table, &key, FIELD_CURRENT_PAGE, page)
            .await
        {
            Ok(_new_current_page) => self.create_page(list_id, page + 1).await,
            Err(StoreError::PreconditionFailed) => {
                log::debug!("try_rollover: peer already rolled {list_id} past page {page}");
                Ok(())
            }
            Err(e) => Err(map_store_err(e)),
        }
    }
}

fn map_store_err(err: StoreError) -> KvListError {
    match err {
        StoreError::Unavailable(msg) => KvListError::StoreUnavailable(msg),
        other => KvListError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvlist_store::InMemoryStore;

    fn engine(max_element_per_page: usize) -> AppendEngine<InMemoryStore> {
        AppendEngine::new(Arc::new(InMemoryStore::new()), "lists", max_element_per_page)
    }

    #[tokio::test]
    async fn idempotent_create_is_safe_to_repeat() {
        let engine = engine(2);
        let list_id = "L".to_string();
        let first = engine
            .idempotent_create(&list_id, Some(Value::from("meta")))
            .await
            .unwrap();
        let second = engine
            .idempotent_create(&list_id, Some(Value::from("ignored")))
            .await
            .unwrap();
        assert_eq!(first.current_page, 0);
        assert_eq!(second.current_page, 0);
    }

    #[tokio::test]
    async fn atomic_append_creates_page_zero_on_first_use() {
        let engine = engine(2);
        let list_id = "L".to_string();
        engine.idempotent_create(&list_id, None).await.unwrap();
        let (page, seq) = engine
            .atomic_append(&list_id, Value::from("Hello0"))
            .await
            .unwrap();
        assert_eq!((page, seq), (0, 0));
    }

    #[tokio::test]
    async fn atomic_append_rolls_over_after_max_element_per_page() {
        let engine = engine(2);
        let list_id = "L".to_string();
        engine.idempotent_create(&list_id, None).await.unwrap();

        for i in 0..5 {
            engine
                .atomic_append(&list_id, Value::from(format!("Hello{i}")))
                .await
                .unwrap();
        }

        let p = engine.read_current_page(&list_id).await.unwrap();
        assert_eq!(p, 2);
    }

    #[tokio::test]
    async fn atomic_append_without_create_reports_page_not_found() {
        let engine = engine(2);
        let err = engine
            .atomic_append(&"missing".to_string(), Value::from("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, KvListError::PageNotFound(_)));
    }
}
