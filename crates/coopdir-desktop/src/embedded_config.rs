//! Search configuration embedded at build time.

use std::time::Duration;

use coopdir_core::config::SearchConfig;

/// Loads the generated search config JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns an empty config so the
/// runtime environment and built-in defaults still apply.
pub fn load_embedded_config() -> SearchConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/search-config.json"));
    parse_embedded_config(raw)
}

fn parse_embedded_config(raw: &str) -> SearchConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse embedded search config: {}", error);
        SearchConfig::default()
    })
}

/// Settings the search page needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub api_base_url: String,
    pub debounce: Duration,
}

/// Runtime environment first, then the embedded config, then defaults.
pub fn resolve_settings() -> ResolvedSettings {
    resolve_from(SearchConfig::from_env(), load_embedded_config())
}

fn resolve_from(runtime: SearchConfig, embedded: SearchConfig) -> ResolvedSettings {
    let config = runtime.or(embedded);
    ResolvedSettings {
        api_base_url: config.api_base_url(),
        debounce: config.debounce(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coopdir_core::config::DEFAULT_API_BASE_URL;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_generated_json() {
        let config = parse_embedded_config(
            r#"{ "api_base_url": "https://directory.example.org", "debounce_ms": null }"#,
        );
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://directory.example.org")
        );
        assert_eq!(config.debounce_ms, None);
    }

    #[test]
    fn malformed_json_yields_empty_config() {
        assert_eq!(parse_embedded_config("not json"), SearchConfig::default());
    }

    #[test]
    fn resolves_defaults_when_nothing_is_configured() {
        let settings = resolve_from(SearchConfig::default(), SearchConfig::default());
        assert_eq!(
            settings,
            ResolvedSettings {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                debounce: Duration::from_millis(100),
            }
        );
    }

    #[test]
    fn embedded_values_fill_runtime_gaps() {
        let embedded = SearchConfig {
            api_base_url: Some("https://directory.example.org/".to_string()),
            debounce_ms: Some(300),
        };
        let settings = resolve_from(SearchConfig::default(), embedded);
        assert_eq!(settings.api_base_url, "https://directory.example.org");
        assert_eq!(settings.debounce, Duration::from_millis(300));
    }
}
