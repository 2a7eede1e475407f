pub mod error;
pub mod models;

#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "server")]
mod memory;
#[cfg(feature = "server")]
pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "postgres")]
pub use postgres::PgItemStore;

pub use error::StoreError;
pub use models::{Item, NewItem};
#[cfg(feature = "server")]
pub use repo::ItemStore;
