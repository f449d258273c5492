use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct EmbeddedSearchConfig {
    api_base_url: Option<String>,
    debounce_ms: Option<u64>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=COOPDIR_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=COOPDIR_SEARCH_DEBOUNCE_MS");

    if let Err(error) = write_embedded_config() {
        println!("cargo:warning=failed to generate embedded search config: {error}");
    }
}

fn write_embedded_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = EmbeddedSearchConfig {
        api_base_url: env_var_trimmed("COOPDIR_API_BASE_URL"),
        debounce_ms: env_var_trimmed("COOPDIR_SEARCH_DEBOUNCE_MS")
            .and_then(|value| value.parse().ok()),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("search-config.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
