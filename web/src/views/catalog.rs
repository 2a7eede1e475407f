use dioxus::prelude::*;
use ui::ItemList;

#[component]
pub fn Catalog() -> Element {
    rsx! {
        ItemList {}
    }
}
