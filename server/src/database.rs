use std::sync::Arc;

use store::{ItemStore, MemoryStore, PgItemStore};

use crate::settings::{Backend, Database};

/// Open the item store the process will use for its whole lifetime.
///
/// A Postgres store that cannot connect is still returned; requests against it
/// fail individually.
pub async fn open_store(settings: &Database) -> Arc<dyn ItemStore> {
    match settings.backend {
        Backend::Postgres => Arc::new(PgItemStore::connect(&settings.url).await),
        Backend::Memory => {
            tracing::warn!("Using the in-memory item store; items are lost on restart");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::NewItem;

    #[tokio::test]
    async fn test_memory_backend() {
        let settings = Database {
            backend: Backend::Memory,
            url: String::new(),
        };
        let store = open_store(&settings).await;
        store.insert(NewItem::new("Pen", "Blue ink")).await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_postgres_is_not_fatal() {
        let settings = Database {
            backend: Backend::Postgres,
            url: "not a database url".to_string(),
        };
        let store = open_store(&settings).await;
        assert!(store.list_all().await.is_err());
    }
}
