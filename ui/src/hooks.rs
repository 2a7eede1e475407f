use dioxus::prelude::*;
use store::Item;

use crate::client;

/// Item list loaded once when the calling component mounts.
///
/// The list is never refreshed automatically; call [`refresh_items`] to reload it.
pub fn use_items() -> Signal<Vec<Item>> {
    let items = use_signal(Vec::<Item>::new);
    let _loader = use_resource(move || refresh_items(items));
    items
}

/// Replace the list with the server's current contents.
///
/// On failure the error is logged and the list is left as it was.
pub async fn refresh_items(mut items: Signal<Vec<Item>>) {
    match client::fetch_items().await {
        Ok(fetched) => items.set(fetched),
        Err(e) => tracing::error!("Error fetching items: {}", e),
    }
}
