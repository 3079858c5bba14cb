//! The Retrieval Engine: `getCurrentPage`, `retrieve`, `retrieveLastMostRecent`,
//! `retrieveNextMostRecent`, and the cursor arithmetic (spec.md §4.4)
//!
//! Per the Open Question in spec.md §9, the source's overloaded
//! `Retrieve` is split here into two distinct operations:
//! [`RetrievalEngine::get_summary`] and [`RetrievalEngine::get_data_page`].

use std::sync::Arc;

use kvlist_core::constants::Constants;
use kvlist_core::error::{KvListError, Result};
use kvlist_core::model::{Page, Summary};
use kvlist_core::types::{Cursor, Item, ListId, PageNumber, Value};
use kvlist_store::KvStore;

/// Field name of a page's element list, projected out of `Get`
const FIELD_DATA_LIST: &str = "dataList";

/// Implements the read side of the protocol against any [`KvStore`]
pub struct RetrievalEngine<S: KvStore> {
    store: Arc<S>,
    table: String,
}

impl<S: KvStore> RetrievalEngine<S> {
    pub fn new(store: Arc<S>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    /// `GetCurrentPage(listId)`
    ///
    /// [`KvListError::PageNotFound`] if the list has not been created.
    pub async fn get_current_page(&self, list_id: &ListId) -> Result<PageNumber> {
        Ok(self.get_summary(list_id).await?.current_page)
    }

    /// Reads the summary item directly
    pub async fn get_summary(&self, list_id: &ListId) -> Result<Summary> {
        let key = Constants::summary_key(list_id);
        let item = self
            .store
            .get(&self.table, &key, None)
            .await
            .map_err(map_store_err)?
            .ok_or_else(|| KvListError::PageNotFound(list_id.clone()))?;
        Summary::from_store_item(&item)
            .ok_or_else(|| KvListError::Other(format!("malformed summary for {list_id}")))
    }

    /// Reads one data page, decorating every element with its address
    ///
    /// A missing page is not an error: it is silently treated as empty
    /// per spec.md §3 invariant 2 (a "blank page").
    pub async fn get_data_page(&self, list_id: &ListId, page: PageNumber) -> Result<Vec<Item>> {
        let key = Constants::page_key(list_id, page);
        let item = self
            .store
            .get(&self.table, &key, Some(&[FIELD_DATA_LIST]))
            .await
            .map_err(map_store_err)?;

        let data_list = match item {
            Some(item) => Page::from_store_item(&item).map(|p| p.data_list).unwrap_or_default(),
            None => {
                log::trace!("get_data_page: {list_id} page {page} is blank");
                Vec::new()
            }
        };

        Ok(decorate(list_id, page, data_list))
    }

    /// `RetrieveLastMostRecent(listId, N)`: shorthand for
    /// `RetrieveNElement` starting at `currentPage` with no in-page offset
    pub async fn retrieve_last_most_recent(&self, list_id: &ListId, n: usize) -> Result<Vec<Item>> {
        let current_page = self.get_current_page(list_id).await?;
        self.retrieve_n_element(list_id, current_page, None, n).await
    }

    /// `RetrieveNextMostRecent(listId, cursor, N)`: continues walking
    /// backward from the element strictly preceding `cursor`
    pub async fn retrieve_next_most_recent(
        &self,
        list_id: &ListId,
        cursor: Cursor,
        n: usize,
    ) -> Result<Vec<Item>> {
        let (from_page, from_sequence_exclusive) = if cursor.sequence_id == 0 {
            if cursor.page_id == 0 {
                // Clamp: already at the head, nothing precedes it.
                (0, Some(0))
            } else {
                (cursor.page_id - 1, None)
            }
        } else {
            (cursor.page_id, Some(cursor.sequence_id))
        };
        self.retrieve_n_element(list_id, from_page, from_sequence_exclusive, n)
            .await
    }

    /// The core walk (spec.md §4.4): fetch pages downward from `from_page`,
    /// truncating only the first page fetched to the prefix strictly
    /// older than `from_sequence_exclusive`, reversing each page's items
    /// and concatenating, until `n` items are collected or page 0 is
    /// exhausted.
    async fn retrieve_n_element(
        &self,
        list_id: &ListId,
        from_page: PageNumber,
        mut from_sequence_exclusive: Option<u64>,
        n: usize,
    ) -> Result<Vec<Item>> {
        let mut accumulator = Vec::new();
        let mut page = from_page as i128;

        while page >= 0 && accumulator.len() < n {
            let mut items = self.get_data_page(list_id, page as PageNumber).await?;

            if let Some(cut) = from_sequence_exclusive.take() {
                items.truncate(cut as usize);
            }

            items.reverse();
            accumulator.extend(items);
            page -= 1;
        }

        accumulator.truncate(n);
        Ok(accumulator)
    }
}

fn decorate(list_id: &ListId, page: PageNumber, data_list: Vec<Value>) -> Vec<Item> {
    data_list
        .into_iter()
        .enumerate()
        .map(|(i, value)| Item {
            value,
            page_id: page,
            sequence_id: i as u64,
            resource_id_parent: list_id.clone(),
        })
        .collect()
}

fn map_store_err(err: kvlist_store::StoreError) -> KvListError {
    match err {
        kvlist_store::StoreError::Unavailable(msg) => KvListError::StoreUnavailable(msg),
        other => KvListError::Other(other.to_string()),
    }
}
