//! Landing page for the edit route.
//!
//! Editing itself lives behind the directory's own edit workflow; this page
//! only confirms which record was selected.

use dioxus::prelude::*;

use crate::app::Route;
use crate::theme::PALETTE;

#[component]
pub fn EditHome(id: String) -> Element {
    rsx! {
        div {
            class: "edit-home",
            style: "padding: 16px 24px;",
            h2 {
                style: "color: {PALETTE.label};",
                "Edit cooperative {id}"
            }
            Link {
                to: Route::Search {},
                style: "color: {PALETTE.link};",
                "Back to search"
            }
        }
    }
}
