//! Property tests for the non-concurrent case (spec.md §8 "bounded
//! overshoot" and "append totality").

use std::sync::Arc;

use kvlist_core::types::Value;
use kvlist_engine::{AppendEngine, RetrievalEngine};
use kvlist_store::InMemoryStore;
use proptest::prelude::*;

const TABLE: &str = "lists";

fn run_sequential_appends(max_element_per_page: usize, count: usize) -> (u64, Vec<usize>) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let store = Arc::new(InMemoryStore::new());
        let append = AppendEngine::new(store.clone(), TABLE, max_element_per_page);
        let retrieve = RetrievalEngine::new(store, TABLE);
        let list_id = "seq".to_string();
        append.idempotent_create(&list_id, None).await.unwrap();

        for i in 0..count {
            append
                .atomic_append(&list_id, Value::from(format!("v{i}")))
                .await
                .unwrap();
        }

        let current_page = retrieve.get_current_page(&list_id).await.unwrap();
        let mut lengths = Vec::new();
        for page in 0..=current_page {
            lengths.push(retrieve.get_data_page(&list_id, page).await.unwrap().len());
        }
        (current_page, lengths)
    })
}

proptest! {
    #[test]
    fn sequential_appends_never_overshoot_page_capacity(
        max_element_per_page in 1usize..6,
        count in 0usize..40,
    ) {
        let (_current_page, lengths) = run_sequential_appends(max_element_per_page, count);
        let total: usize = lengths.iter().sum();
        prop_assert_eq!(total, count);
        for len in &lengths {
            prop_assert!(*len <= max_element_per_page);
        }
    }

    #[test]
    fn sequential_appends_land_on_the_expected_page(
        max_element_per_page in 1usize..6,
        count in 1usize..40,
    ) {
        let (current_page, _lengths) = run_sequential_appends(max_element_per_page, count);
        let expected = ((count - 1) / max_element_per_page) as u64;
        prop_assert_eq!(current_page, expected);
    }
}
