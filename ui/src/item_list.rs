use dioxus::prelude::*;

use crate::format::detail_parts;
use crate::hooks::use_items;

/// Read-only list with each item's name emphasised.
#[component]
pub fn ItemList() -> Element {
    let items = use_items();

    rsx! {
        div {
            class: "item-list",
            h2 { "Item List" }
            ul {
                for item in items() {
                    li {
                        key: "{item.id}",
                        {
                            let (name, rest) = detail_parts(&item);
                            rsx! {
                                strong { {name} }
                                {rest}
                            }
                        }
                    }
                }
            }
        }
    }
}
