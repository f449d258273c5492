//! Search view - the advanced directory search page

use dioxus::prelude::*;

use crate::components::AdvancedSearch;

#[component]
pub fn Search() -> Element {
    rsx! {
        div {
            class: "search-page",
            style: "padding: 16px 24px;",
            AdvancedSearch {}
        }
    }
}
