//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    FREE_TIER_DELAY_MS, SESSION_CHANNEL_CAPACITY, SESSION_TOPIC, SIMULATED_PURCHASE_DELAY_MS,
};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub generation: GenerationConfig,
    pub session: SessionConfig,
    pub credits: CreditsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote auth/database service. Leaving either field unset selects guest
/// mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: Option<String>,
    #[serde(skip_serializing)]
    pub anon_key: Option<String>,
}

impl BackendConfig {
    /// True when both the service URL and anon key are present and non-blank.
    pub fn is_configured(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.url) && present(&self.anon_key)
    }
}

/// Generative model endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout_seconds: u64,
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_seconds: 60,
            max_attempts: 2,
        }
    }
}

/// Cross-context session exclusivity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub topic: String,
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { topic: SESSION_TOPIC.to_string(), channel_capacity: SESSION_CHANNEL_CAPACITY }
    }
}

/// Which calendar the daily reset rolls over on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayZone {
    #[default]
    Local,
    Utc,
}

crate::impl_wire_name_conversions!(DayZone {
    Local => "local",
    Utc => "utc",
});

/// Credit and billing behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsConfig {
    pub free_tier_delay_ms: u64,
    pub day_zone: DayZone,
    pub purchase_delay_ms: u64,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            free_tier_delay_ms: FREE_TIER_DELAY_MS,
            day_zone: DayZone::Local,
            purchase_delay_ms: SIMULATED_PURCHASE_DELAY_MS,
        }
    }
}

/// Guest-mode local store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: "rizzmaster.db".to_string(), pool_size: 4 }
    }
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string(), json: false }
    }
}
