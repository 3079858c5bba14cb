//! `PagedListClient`: the callable surface named in spec.md §6
//!
//! A thin composition of [`kvlist_engine::AppendEngine`] and
//! [`kvlist_engine::RetrievalEngine`] over one [`Configuration`], generic
//! over any [`KvStore`] so the same client works against
//! [`kvlist_store::InMemoryStore`] in tests/demos and against a real
//! backing store in production.

use std::sync::Arc;

use kvlist_core::config::Configuration;
use kvlist_core::constants::Constants;
use kvlist_core::error::{KvListError, Result};
use kvlist_core::model::Summary;
use kvlist_core::types::{Cursor, Item, ListId, PageNumber, RawCursor, SequenceId, Value};
use kvlist_engine::{AppendEngine, RetrievalEngine};
use kvlist_store::KvStore;

/// Static, process-wide naming constants (`GetConstants`)
#[derive(Debug, Clone, Copy)]
pub struct ConstantsInfo {
    pub summary_suffix: &'static str,
}

/// The public entry point: every operation in spec.md §6
pub struct PagedListClient<S: KvStore> {
    configuration: Configuration,
    append: AppendEngine<S>,
    retrieve: RetrievalEngine<S>,
}

impl<S: KvStore> PagedListClient<S> {
    /// Builds a client over `store` using an already-built [`Configuration`]
    ///
    /// This is the re-architected replacement for the source's
    /// `ConfigureStore`/`ConfigureMaximumNumberOfElementPerPage` pair of
    /// global setters (see SPEC_FULL.md DESIGN NOTES §9): callers build a
    /// `Configuration` once via [`Configuration::builder`] and hand it in
    /// here.
    pub fn new(store: Arc<S>, configuration: Configuration) -> Self {
        let table = configuration.store().table_name.clone();
        let max_element_per_page = configuration.max_element_per_page();
        Self {
            append: AppendEngine::new(store.clone(), table.clone(), max_element_per_page),
            retrieve: RetrievalEngine::new(store, table),
            configuration,
        }
    }

    /// `IdempotentCreate(id, metadata?)`
    pub async fn idempotent_create(
        &self,
        list_id: &ListId,
        metadata: Option<Value>,
    ) -> Result<Summary> {
        self.append.idempotent_create(list_id, metadata).await
    }

    /// `AtomicAppend(id, value)`
    pub async fn atomic_append(
        &self,
        list_id: &ListId,
        value: Value,
    ) -> Result<(PageNumber, SequenceId)> {
        self.append.atomic_append(list_id, value).await
    }

    /// `AtomicBulkAppendBulk` — reserved and unimplemented (spec.md §6)
    pub async fn atomic_bulk_append(&self, list_id: &ListId, _values: Vec<Value>) -> Result<()> {
        log::warn!("atomic_bulk_append called for {list_id}, but it is not implemented");
        Err(KvListError::NotImplemented)
    }

    /// `GetCurrentPage(id)`
    pub async fn get_current_page(&self, list_id: &ListId) -> Result<PageNumber> {
        self.retrieve.get_current_page(list_id).await
    }

    /// `GetSummary` — the summary half of the source's overloaded `Retrieve`
    pub async fn get_summary(&self, list_id: &ListId) -> Result<Summary> {
        self.retrieve.get_summary(list_id).await
    }

    /// `GetPage(id, pageId)` / `Retrieve(id, pageId)` — the data-page half
    pub async fn get_data_page(&self, list_id: &ListId, page: PageNumber) -> Result<Vec<Item>> {
        self.retrieve.get_data_page(list_id, page).await
    }

    /// `RetrieveLastMostRecent(id, N)`
    pub async fn retrieve_last_most_recent(&self, list_id: &ListId, n: usize) -> Result<Vec<Item>> {
        self.retrieve.retrieve_last_most_recent(list_id, n).await
    }

    /// `RetrieveNextMostRecent(id, cursor, N)`
    ///
    /// `cursor` is anything convertible to a [`Cursor`]; a [`RawCursor`]
    /// missing either field yields [`KvListError::InvalidCursor`].
    pub async fn retrieve_next_most_recent(
        &self,
        list_id: &ListId,
        cursor: impl Into<RawCursor>,
        n: usize,
    ) -> Result<Vec<Item>> {
        let cursor: Cursor = cursor.into().try_into()?;
        self.retrieve.retrieve_next_most_recent(list_id, cursor, n).await
    }

    /// `GetConstants()`
    pub fn get_constants(&self) -> ConstantsInfo {
        ConstantsInfo {
            summary_suffix: Constants::SUMMARY_SUFFIX,
        }
    }

    /// `GetCurrentConfiguration()`
    pub fn get_current_configuration(&self) -> &Configuration {
        &self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvlist_store::InMemoryStore;

    fn client(max_element_per_page: usize) -> PagedListClient<InMemoryStore> {
        let configuration = Configuration::builder()
            .store("us-east-1", "lists")
            .max_element_per_page(max_element_per_page)
            .build();
        PagedListClient::new(Arc::new(InMemoryStore::new()), configuration)
    }

    #[tokio::test]
    async fn end_to_end_scenarios_from_spec() {
        let client = client(2);
        let list_id = "L".to_string();

        client.idempotent_create(&list_id, None).await.unwrap();
        assert_eq!(client.get_current_page(&list_id).await.unwrap(), 0);

        for i in 0..5 {
            client
                .atomic_append(&list_id, Value::from(format!("Hello{i}")))
                .await
                .unwrap();
        }
        assert_eq!(client.get_current_page(&list_id).await.unwrap(), 2);

        let page2 = client.get_data_page(&list_id, 2).await.unwrap();
        assert_eq!(page2[0].value, Value::from("Hello4"));
        assert_eq!(page2[0].page_id, 2);
        assert_eq!(page2[0].sequence_id, 0);

        let last_three = client.retrieve_last_most_recent(&list_id, 3).await.unwrap();
        let vals: Vec<_> = last_three.iter().map(|i| i.value.clone()).collect();
        assert_eq!(
            vals,
            vec![Value::from("Hello4"), Value::from("Hello3"), Value::from("Hello2")]
        );

        let first = client.retrieve_last_most_recent(&list_id, 1).await.unwrap();
        let cursor: Cursor = (&first[0]).into();
        let rest = client
            .retrieve_next_most_recent(&list_id, cursor, 300)
            .await
            .unwrap();
        let vals: Vec<_> = rest.iter().map(|i| i.value.clone()).collect();
        assert_eq!(
            vals,
            vec![
                Value::from("Hello3"),
                Value::from("Hello2"),
                Value::from("Hello1"),
                Value::from("Hello0"),
            ]
        );
    }

    #[tokio::test]
    async fn atomic_bulk_append_is_not_implemented() {
        let client = client(2);
        let err = client
            .atomic_bulk_append(&"L".to_string(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, KvListError::NotImplemented));
    }

    #[tokio::test]
    async fn raw_cursor_missing_a_field_is_rejected() {
        let client = client(2);
        let raw = RawCursor {
            page_id: Some(1),
            sequence_id: None,
        };
        let err = client
            .retrieve_next_most_recent(&"L".to_string(), raw, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, KvListError::InvalidCursor));
    }
}
