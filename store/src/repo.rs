//! # Item store — the persistence seam
//!
//! [`ItemStore`] is the only interface the HTTP layer sees. It has exactly two
//! operations, both async and both fallible:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`insert`](ItemStore::insert) | Assigns a fresh identifier, persists the payload as given, returns the stored [`Item`]. |
//! | [`list_all`](ItemStore::list_all) | Returns every stored [`Item`]. Order is backend-defined; both backends here use insertion order. |
//!
//! Neither operation validates fields or retries on failure. Implementations
//! live in sibling modules ([`crate::memory`], and `crate::postgres` behind the
//! `postgres` feature).
//!
//! The trait is object safe (via `async_trait`) so a server can hold a single
//! `Arc<dyn ItemStore>` for its whole lifetime regardless of backend.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Item, NewItem};

/// Async interface over the item collection.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn insert(&self, record: NewItem) -> Result<Item, StoreError>;

    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;
}

/// Generate a new opaque item identifier.
pub(crate) fn new_item_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
