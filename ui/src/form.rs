use std::future::Future;

use store::{Item, NewItem};

use crate::client::RequestError;

/// Tracked values of the two create-form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    /// Update the field named by an input's `name` attribute. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }

    /// Both inputs are `required`: neither may be empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    pub fn to_payload(&self) -> NewItem {
        NewItem::new(self.name.clone(), self.description.clone())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Send a complete draft through `create`.
///
/// On success the draft is cleared and the stored item returned. On failure
/// the error is logged and the draft keeps its values. Incomplete drafts are
/// never sent.
pub async fn submit_draft<F, Fut>(draft: &mut ItemDraft, create: F) -> Option<Item>
where
    F: FnOnce(NewItem) -> Fut,
    Fut: Future<Output = Result<Item, RequestError>>,
{
    if !draft.is_complete() {
        return None;
    }
    match create(draft.to_payload()).await {
        Ok(item) => {
            draft.clear();
            Some(item)
        }
        Err(e) => {
            tracing::error!("Error adding item: {}", e);
            None
        }
    }
}
