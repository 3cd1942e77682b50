use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::FetchPolicy;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// First backoff step; doubles per retry.
    #[serde(default = "default_retry_base_ms")]
    pub retry_base_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Multi-request configuration (history walks, batches)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Raise year-end requests older than a chart's first year to that year.
    #[serde(default = "default_true")]
    pub clamp_year_end: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://www.billboard.com".to_string()
}
fn default_timeout_secs() -> u64 {
    25
}
fn default_max_retries() -> u32 {
    5
}
fn default_retry_base_ms() -> u64 {
    250
}
fn default_user_agent() -> String {
    "chart-scraper/0.1 (+https://github.com/chart-scraper/chart-scraper)".to_string()
}
fn default_request_delay_ms() -> u64 {
    1000
}
fn default_jitter_ms() -> u64 {
    250
}
fn default_concurrency() -> usize {
    3
}
fn default_true() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_base_ms: default_retry_base_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
            jitter_ms: default_jitter_ms(),
            concurrency: default_concurrency(),
            clamp_year_end: true,
        }
    }
}

impl HttpConfig {
    /// Per-request policy derived from the configured timeout and retry budget.
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("CHARTS").separator("__"))
            .build()?;

        let app_cfg: AppConfig = cfg.try_deserialize().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration ({}); using defaults", e);
            AppConfig::default()
        });
        Ok(app_cfg)
    }
}
