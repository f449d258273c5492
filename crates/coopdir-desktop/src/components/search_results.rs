//! Search results list

use dioxus::prelude::*;

use coopdir_core::search::ResultRow;

use crate::theme::PALETTE;

/// Results of the last search, in backend order.
///
/// Renders nothing at all when there are no rows.
#[component]
pub fn SearchResults(rows: Vec<ResultRow>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "results-heading",
            style: "margin-top: 16px; font-weight: 500;",
            "Results"
        }
        ul {
            class: "list-group list-group-flush",
            style: "list-style: none; margin: 0; padding: 0;",
            for row in rows {
                ResultItem {
                    key: "{row.id}",
                    name: row.name,
                    edit_path: row.edit_path,
                }
            }
        }
    }
}

/// A single result row with a link to the record's edit page
#[component]
fn ResultItem(name: String, edit_path: String) -> Element {
    rsx! {
        li {
            class: "list-group-item",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 10px 4px;
                border-bottom: 1px solid {PALETTE.border_light};
            ",
            span { "{name}" }
            Link {
                class: "float-right",
                to: edit_path,
                style: "color: {PALETTE.link}; text-decoration: none;",
                "Edit"
            }
        }
    }
}
