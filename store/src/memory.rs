use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Item, NewItem};
use crate::repo::{new_item_id, ItemStore};

/// In-memory ItemStore for tests and database-less runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<Vec<Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Item>>, StoreError> {
        self.items
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn insert(&self, record: NewItem) -> Result<Item, StoreError> {
        let item = record.into_item(new_item_id());
        self.lock()?.push(item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_insert_and_list() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.list_all().await.unwrap().is_empty());

        let saved = store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap();
        assert_eq!(saved.name(), "Pen");
        assert_eq!(saved.description(), "Blue ink");
        assert!(!saved.id.is_empty());

        let items = store.list_all().await.unwrap();
        assert_eq!(items, vec![saved]);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryStore::new();
        for i in 0..50 {
            store
                .insert(NewItem::new(format!("item {i}"), "x"))
                .await
                .unwrap();
        }

        let items = store.list_all().await.unwrap();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_list_is_stable_without_writes() {
        let store = MemoryStore::new();
        store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap();
        store.insert(NewItem::new("Mug", "Ceramic")).await.unwrap();

        let first = store.list_all().await.unwrap();
        let second = store.list_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name(), "Pen");
        assert_eq!(first[1].name(), "Mug");
    }

    #[tokio::test]
    async fn test_fields_pass_through_unvalidated() {
        let store = MemoryStore::new();
        let payload = NewItem::from_value(json!({"name": "Lamp", "watts": 40})).unwrap();

        let saved = store.insert(payload).await.unwrap();
        assert_eq!(saved.description(), "");
        assert_eq!(saved.fields.get("watts"), Some(&json!(40)));
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap();
        assert_eq!(other.list_all().await.unwrap().len(), 1);
    }
}
