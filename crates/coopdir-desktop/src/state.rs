//! Application state management
//!
//! Settings shared with every page via a Dioxus context provider.

use std::time::Duration;

use dioxus::prelude::*;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Normalized directory API base URL
    pub api_base_url: Signal<String>,
    /// Debounce window applied before each directory request
    pub debounce: Signal<Duration>,
}
