//! Loading indicator component

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Spinner shown while a directory request is outstanding
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            style: "padding: 12px 0; color: {PALETTE.text_muted};",
            span { class: "spinner-border" }
            span { class: "sr-only", "Loading..." }
        }
    }
}
