//! Search configuration.
//!
//! The directory API base URL and the debounce window are read once at
//! startup. Runtime environment values win over build-time embedded ones.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::normalize_base_url;
use crate::search::DEFAULT_DEBOUNCE;

pub const API_BASE_URL_ENV: &str = "COOPDIR_API_BASE_URL";
pub const DEBOUNCE_MS_ENV: &str = "COOPDIR_SEARCH_DEBOUNCE_MS";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Externally supplied search settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl SearchConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debounce_ms = non_blank(lookup(DEBOUNCE_MS_ENV)).and_then(|raw| {
            raw.parse::<u64>()
                .map_err(|error| {
                    tracing::warn!("Ignoring invalid {}={:?}: {}", DEBOUNCE_MS_ENV, raw, error);
                })
                .ok()
        });

        Self {
            api_base_url: non_blank(lookup(API_BASE_URL_ENV)),
            debounce_ms,
        }
    }

    /// Fill unset values from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            api_base_url: non_blank(self.api_base_url)
                .or_else(|| non_blank(fallback.api_base_url)),
            debounce_ms: self.debounce_ms.or(fallback.debounce_ms),
        }
    }

    /// Normalized API base URL, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn api_base_url(&self) -> String {
        let Some(raw) = non_blank(self.api_base_url.clone()) else {
            return DEFAULT_API_BASE_URL.to_string();
        };
        normalize_base_url(&raw).unwrap_or_else(|error| {
            tracing::warn!("{}; using {}", error, DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        })
    }

    pub fn debounce(&self) -> Duration {
        self.debounce_ms.map_or(DEFAULT_DEBOUNCE, Duration::from_millis)
    }
}

/// Trimmed setting value, treating blank as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
