use dioxus::prelude::*;

use crate::format::summary_line;
use crate::hooks::{refresh_items, use_items};
use crate::item_form::ItemForm;

/// Main view: the create form above the list of items.
///
/// After each successful create the list is fetched again; the new item is
/// never inserted locally ahead of the server's answer.
#[component]
pub fn ItemApp() -> Element {
    let items = use_items();

    rsx! {
        div {
            class: "App",
            header {
                class: "App-header",
                h1 { "My Item App" }
                ItemForm {
                    on_created: move |_| {
                        spawn(refresh_items(items));
                    },
                }
                ul {
                    for item in items() {
                        li {
                            key: "{item.id}",
                            {summary_line(&item)}
                        }
                    }
                }
            }
        }
    }
}
