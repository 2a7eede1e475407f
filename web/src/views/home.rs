use dioxus::prelude::*;
use ui::ItemApp;

#[component]
pub fn Home() -> Element {
    rsx! {
        ItemApp {}
    }
}
