//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod client;
pub use client::RequestError;

pub mod form;
pub use form::ItemDraft;

pub mod format;

mod hooks;
pub use hooks::{refresh_items, use_items};

mod navbar;
pub use navbar::Navbar;

mod item_form;
pub use item_form::ItemForm;

mod item_app;
pub use item_app::ItemApp;

mod item_list;
pub use item_list::ItemList;

pub const ITEMS_CSS: Asset = asset!("/assets/items.css");
