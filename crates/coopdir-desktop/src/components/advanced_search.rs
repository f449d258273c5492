//! Advanced search form

use std::rc::Rc;

use dioxus::prelude::*;

use coopdir_core::client::CoopApiClient;
use coopdir_core::search::DebouncedFetcher;
use coopdir_core::{EnabledFilter, FilterField, SearchFormState};

use super::{LoadingIndicator, SearchResults};
use crate::state::AppState;
use crate::theme::PALETTE;

type Fetcher = Rc<DebouncedFetcher<CoopApiClient>>;

/// Name + enabled filter form with a results list underneath.
///
/// Every instance owns its fetcher and in-flight task, so two forms on screen
/// never cancel each other's searches.
#[component]
pub fn AdvancedSearch() -> Element {
    let state = use_context::<AppState>();
    let fetcher: Option<Fetcher> = use_hook(|| {
        match CoopApiClient::new((state.api_base_url)()) {
            Ok(client) => Some(Rc::new(DebouncedFetcher::with_window(
                client,
                (state.debounce)(),
            ))),
            Err(e) => {
                tracing::error!("Failed to build directory client: {}", e);
                None
            }
        }
    });

    let mut form = use_signal(|| {
        let base_url = fetcher.as_ref().map_or_else(
            || (state.api_base_url)(),
            |fetcher| fetcher.source().base_url().to_string(),
        );
        SearchFormState::new(base_url)
    });
    let mut in_flight = use_signal(|| None::<Task>);

    let mut start_search = move |url: String| {
        let Some(fetcher) = fetcher.clone() else {
            return;
        };
        if let Some(task) = in_flight.take() {
            task.cancel();
        }

        let ticket = fetcher.begin();
        form.write().begin_search(&url);
        let task = spawn(async move {
            let outcome = fetcher.run(ticket, &url).await;
            form.write().apply(outcome);
        });
        in_flight.set(Some(task));
    };

    let submit = move |_| {
        let submitted = form.write().submit();
        if let Some(url) = submitted {
            start_search(url);
        }
    };

    let current = form.read();
    let filters_json = serde_json::to_string(current.filters()).unwrap_or_default();
    let query_url = current.query_url().to_string();
    let name = current.filters().name.clone().unwrap_or_default();
    let enabled = current
        .filters()
        .enabled
        .clone()
        .unwrap_or_else(|| EnabledFilter::default().value().to_string());
    let rows = current.rows();
    let loading = current.is_loading();
    drop(current);

    rsx! {
        div {
            class: "form container-fluid",

            h2 { "{filters_json}" }
            h2 { "Search URL: {query_url}" }

            div {
                class: "form-group",
                label {
                    r#for: "name",
                    style: "color: {PALETTE.label};",
                    "Name"
                }
                input {
                    r#type: "text",
                    id: "name",
                    name: "name",
                    class: "form-control",
                    placeholder: "Enter cooperative name",
                    value: "{name}",
                    oninput: move |evt| {
                        form.write().set_field(FilterField::Name, evt.value());
                    },
                    style: "
                        width: 100%;
                        padding: 8px 12px;
                        border: 1px solid {PALETTE.border};
                        border-radius: 6px;
                    ",
                }
            }

            div {
                class: "form-group",
                label {
                    r#for: "enabled",
                    style: "color: {PALETTE.label};",
                    "Enabled"
                }
                select {
                    id: "enabled",
                    name: "enabled",
                    class: "form-control",
                    value: "{enabled}",
                    onchange: move |evt| {
                        form.write().set_field(FilterField::Enabled, evt.value());
                    },
                    for choice in EnabledFilter::ALL {
                        option {
                            value: choice.value(),
                            selected: choice.value() == enabled,
                            {choice.label()}
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "btn btn-primary",
                onclick: submit,
                style: "
                    margin: 10px;
                    color: {PALETTE.accent_text};
                    background-color: {PALETTE.accent};
                    border: none;
                    border-radius: 4px;
                    padding: 6px 16px;
                ",
                "Submit"
            }

            div {
                SearchResults { rows }
                if loading {
                    LoadingIndicator {}
                }
            }
        }
    }
}
