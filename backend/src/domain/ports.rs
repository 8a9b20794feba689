//! Storage capability port for items, plus the in-memory implementation
//! that backs handler and integration tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::Item;

/// Failures surfaced by [`ItemStore`] implementations.
///
/// `NotFound` is a sentinel distinct from generic storage failure; inbound
/// adapters map it to 404 and everything else to a server error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemStoreError {
    /// No row matched the requested identifier.
    #[error("record not found")]
    NotFound,
    /// The backing store could not be reached.
    #[error("storage connection failed: {message}")]
    Connection {
        /// Driver-level detail, logged server-side only.
        message: String,
    },
    /// The statement failed for a reason other than a missing row.
    #[error("storage query failed: {message}")]
    Query {
        /// Driver-level detail, logged server-side only.
        message: String,
    },
}

impl ItemStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the todolist table.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item; returns it with the storage-assigned id.
    async fn insert(&self, item: Item) -> Result<Item, ItemStoreError>;

    /// Fetch one item by id.
    ///
    /// Ids below [`Item::MIN_ID`] fail with [`ItemStoreError::NotFound`]
    /// without touching storage.
    async fn get(&self, id: i64) -> Result<Item, ItemStoreError>;

    /// Fetch every item in ascending id order. Empty stores yield an empty
    /// vector, never an error.
    async fn get_all(&self) -> Result<Vec<Item>, ItemStoreError>;

    /// Rewrite title, description, and completed for an existing item. The
    /// caller merges partial input before calling; a vanished row fails
    /// with [`ItemStoreError::NotFound`].
    async fn update(&self, item: Item) -> Result<Item, ItemStoreError>;

    /// Remove one item by id; removing nothing fails with
    /// [`ItemStoreError::NotFound`].
    async fn delete(&self, id: i64) -> Result<(), ItemStoreError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    items: BTreeMap<i64, Item>,
    // Monotonic, so deleted ids are never reassigned.
    next_id: i64,
}

/// Mutex-guarded map store with the same observable semantics as the
/// PostgreSQL adapter.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    state: Mutex<InMemoryState>,
}

impl InMemoryItemStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, ItemStoreError> {
        self.state
            .lock()
            .map_err(|_| ItemStoreError::query("store mutex poisoned"))
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, mut item: Item) -> Result<Item, ItemStoreError> {
        let mut state = self.lock()?;
        state.next_id += 1;
        item.id = state.next_id;
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get(&self, id: i64) -> Result<Item, ItemStoreError> {
        if id < Item::MIN_ID {
            return Err(ItemStoreError::NotFound);
        }
        let state = self.lock()?;
        state.items.get(&id).cloned().ok_or(ItemStoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Item>, ItemStoreError> {
        let state = self.lock()?;
        Ok(state.items.values().cloned().collect())
    }

    async fn update(&self, item: Item) -> Result<Item, ItemStoreError> {
        let mut state = self.lock()?;
        match state.items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(item)
            }
            None => Err(ItemStoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ItemStoreError> {
        let mut state = self.lock()?;
        state
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(ItemStoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_rt::System;
    use rstest::rstest;

    fn draft(title: &str) -> Item {
        Item {
            id: 0,
            title: title.to_owned(),
            description: String::new(),
            completed: false,
        }
    }

    #[rstest]
    fn insert_assigns_fresh_positive_ids() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            let first = store.insert(draft("one")).await.expect("insert");
            let second = store.insert(draft("two")).await.expect("insert");
            assert_eq!(first.id, 1);
            assert_eq!(second.id, 2);

            let fetched = store.get(first.id).await.expect("get");
            assert_eq!(fetched, first);
        });
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn get_rejects_nonpositive_ids(#[case] id: i64) {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            store.insert(draft("one")).await.expect("insert");
            let err = store.get(id).await.expect_err("nonpositive id");
            assert_eq!(err, ItemStoreError::NotFound);
        });
    }

    #[rstest]
    fn get_all_returns_ascending_ids() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            for title in ["a", "b", "c"] {
                store.insert(draft(title)).await.expect("insert");
            }
            let items = store.get_all().await.expect("get_all");
            let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        });
    }

    #[rstest]
    fn get_all_on_empty_store_is_empty_not_error() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            assert_eq!(store.get_all().await.expect("get_all"), Vec::new());
        });
    }

    #[rstest]
    fn delete_twice_reports_not_found() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            let item = store.insert(draft("one")).await.expect("insert");
            store.delete(item.id).await.expect("first delete");
            let err = store.delete(item.id).await.expect_err("second delete");
            assert_eq!(err, ItemStoreError::NotFound);
        });
    }

    #[rstest]
    fn update_missing_row_reports_not_found() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            let mut item = draft("one");
            item.id = 42;
            let err = store.update(item).await.expect_err("missing row");
            assert_eq!(err, ItemStoreError::NotFound);
        });
    }

    #[rstest]
    fn update_rewrites_all_mutable_fields() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            let created = store.insert(draft("one")).await.expect("insert");
            let merged = Item {
                id: created.id,
                title: "renamed".to_owned(),
                description: "details".to_owned(),
                completed: true,
            };
            let updated = store.update(merged.clone()).await.expect("update");
            assert_eq!(updated, merged);
            assert_eq!(store.get(created.id).await.expect("get"), merged);
        });
    }

    #[rstest]
    fn deleted_ids_are_never_reassigned() {
        let store = InMemoryItemStore::default();

        System::new().block_on(async move {
            let first = store.insert(draft("one")).await.expect("insert");
            store.delete(first.id).await.expect("delete");
            let second = store.insert(draft("two")).await.expect("insert");
            assert!(second.id > first.id);
        });
    }
}
