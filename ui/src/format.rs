//! Text shown for an item in each list view.

use store::Item;

/// Primary view entry: `"<name> - <description>"`.
pub fn summary_line(item: &Item) -> String {
    format!("{} - {}", item.name(), item.description())
}

/// Secondary view entry, split into the emphasised name and the rest:
/// `("<name>", ": <description>")`.
pub fn detail_parts(item: &Item) -> (String, String) {
    (
        item.name().to_string(),
        format!(": {}", item.description()),
    )
}
