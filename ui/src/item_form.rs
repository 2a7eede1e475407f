use dioxus::prelude::*;
use store::Item;

use crate::client;
use crate::form::{submit_draft, ItemDraft};

/// Form for creating a new item.
///
/// Inputs are controlled by an [`ItemDraft`] signal. On a successful create
/// both inputs are cleared and `on_created` receives the stored item; on
/// failure the error is logged and the inputs keep their values.
#[component]
pub fn ItemForm(on_created: EventHandler<Item>) -> Element {
    let mut draft = use_signal(ItemDraft::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut submitted = draft();
        spawn(async move {
            let created = submit_draft(&mut submitted, |payload| async move {
                client::create_item(&payload).await
            })
            .await;
            if let Some(item) = created {
                draft.set(submitted);
                on_created.call(item);
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            input {
                r#type: "text",
                name: "name",
                value: draft().name,
                oninput: move |evt: FormEvent| draft.write().set("name", evt.value()),
                placeholder: "Item name",
                required: true,
            }
            input {
                r#type: "text",
                name: "description",
                value: draft().description,
                oninput: move |evt: FormEvent| draft.write().set("description", evt.value()),
                placeholder: "Item description",
                required: true,
            }
            button { r#type: "submit", "Add Item" }
        }
    }
}
