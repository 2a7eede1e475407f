//! # Item API service
//!
//! A thin HTTP layer over an [`ItemStore`](store::ItemStore):
//!
//! | Route | Handler | Success | Failure |
//! |-------|---------|---------|---------|
//! | `POST /api/items` | [`items::create_item`] | 201 + stored item | 500 + `{"message": "Error adding item", "error": ...}` |
//! | `GET /api/items` | [`items::list_items`] | 200 + array of items | 500 + `{"message": "Error fetching items", "error": ...}` |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`application`] | Router construction, tracing setup, and the `launch` entry point |
//! | [`database`] | Chooses and opens the item store at startup |
//! | [`error`] | Converts store failures into JSON 500 responses |
//! | [`items`] | The two route handlers |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, environment) |

pub mod application;
pub mod database;
pub mod error;
pub mod items;
pub mod settings;

pub use application::{init_tracing, launch, router, AppState};
pub use settings::Settings;
