//! Main application component and routes

use dioxus::prelude::*;

use crate::embedded_config::resolve_settings;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::{EditHome, Search};

#[derive(Debug, Clone, Routable, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Search {},
    #[route("/edit/:id/home")]
    EditHome { id: String },
}

/// Root application component
#[component]
pub fn App() -> Element {
    let settings = use_hook(|| {
        let settings = resolve_settings();
        tracing::info!(
            "Directory API at {} (debounce {:?})",
            settings.api_base_url,
            settings.debounce
        );
        settings
    });

    let api_base_url = use_signal(|| settings.api_base_url.clone());
    let debounce = use_signal(|| settings.debounce);

    use_context_provider(|| AppState {
        api_base_url,
        debounce,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
            ",
            Router::<Route> {}
        }
    }
}
