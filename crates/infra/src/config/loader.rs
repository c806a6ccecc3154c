//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Read `.env` into the process environment if present
//! 2. Start from a config file if one is found, otherwise from defaults
//! 3. Apply `RIZZ_*` environment variables on top
//!
//! Every setting has a default, so an empty environment yields a working
//! guest-mode configuration.
//!
//! ## Environment Variables
//! - `RIZZ_BACKEND_URL`, `RIZZ_BACKEND_ANON_KEY`: remote auth/database service
//! - `RIZZ_GENERATION_API_KEY` (or `GEMINI_API_KEY`): generative model key
//! - `RIZZ_GENERATION_MODEL`, `RIZZ_GENERATION_API_URL`
//! - `RIZZ_GENERATION_TIMEOUT_SECS`, `RIZZ_GENERATION_MAX_ATTEMPTS`
//! - `RIZZ_SESSION_TOPIC`
//! - `RIZZ_FREE_TIER_DELAY_MS`, `RIZZ_PURCHASE_DELAY_MS`
//! - `RIZZ_DAY_ZONE`: `local` or `utc`
//! - `RIZZ_STORAGE_PATH`, `RIZZ_STORAGE_POOL_SIZE`
//! - `RIZZ_LOG`: tracing filter directive; `RIZZ_LOG_JSON`: JSON output
//!
//! ## File Locations
//! `rizzmaster.toml` / `rizzmaster.json` in the working directory, its two
//! parents, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rizzmaster_domain::{Config, DayZone, Result, RizzError};

const CONFIG_FILE_NAMES: [&str; 2] = ["rizzmaster.toml", "rizzmaster.json"];

/// Load configuration: optional file, then environment overrides.
///
/// # Errors
/// Returns `RizzError::Config` if a config file exists but cannot be parsed,
/// or an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "config.dotenv_loaded");
    }

    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("config.no_file");
            Config::default()
        }
    };

    let config = apply_env(base)?;
    tracing::info!(
        remote_backend = config.backend.is_configured(),
        day_zone = %config.credits.day_zone,
        "config.loaded"
    );
    Ok(config)
}

/// Defaults with environment overrides applied.
pub fn load_from_env() -> Result<Config> {
    apply_env(Config::default())
}

/// Overlay `RIZZ_*` variables onto `config`.
pub fn apply_env(mut config: Config) -> Result<Config> {
    if let Some(url) = env_string("RIZZ_BACKEND_URL") {
        config.backend.url = Some(url);
    }
    if let Some(key) = env_string("RIZZ_BACKEND_ANON_KEY") {
        config.backend.anon_key = Some(key);
    }

    if let Some(key) = env_string("RIZZ_GENERATION_API_KEY").or_else(|| env_string("GEMINI_API_KEY")) {
        config.generation.api_key = Some(key);
    }
    if let Some(model) = env_string("RIZZ_GENERATION_MODEL") {
        config.generation.model = model;
    }
    if let Some(url) = env_string("RIZZ_GENERATION_API_URL") {
        config.generation.api_url = url;
    }
    if let Some(secs) = env_parse::<u64>("RIZZ_GENERATION_TIMEOUT_SECS")? {
        config.generation.timeout_seconds = secs;
    }
    if let Some(attempts) = env_parse::<u32>("RIZZ_GENERATION_MAX_ATTEMPTS")? {
        config.generation.max_attempts = attempts;
    }

    if let Some(topic) = env_string("RIZZ_SESSION_TOPIC") {
        config.session.topic = topic;
    }

    if let Some(ms) = env_parse::<u64>("RIZZ_FREE_TIER_DELAY_MS")? {
        config.credits.free_tier_delay_ms = ms;
    }
    if let Some(ms) = env_parse::<u64>("RIZZ_PURCHASE_DELAY_MS")? {
        config.credits.purchase_delay_ms = ms;
    }
    if let Some(zone) = env_parse::<DayZone>("RIZZ_DAY_ZONE")? {
        config.credits.day_zone = zone;
    }

    if let Some(path) = env_string("RIZZ_STORAGE_PATH") {
        config.storage.path = path;
    }
    if let Some(size) = env_parse::<u32>("RIZZ_STORAGE_POOL_SIZE")? {
        config.storage.pool_size = size;
    }

    if let Some(filter) = env_string("RIZZ_LOG") {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool("RIZZ_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension (`.toml` or `.json`).
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(RizzError::Config(format!("Config file not found: {}", p.display())))
        }
        None => probe_config_paths().ok_or_else(|| {
            RizzError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "config.file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RizzError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RizzError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RizzError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(RizzError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Non-blank value of an environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| RizzError::Config(format!("Invalid {key}={raw}: {e}")))
        })
        .transpose()
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_string(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
