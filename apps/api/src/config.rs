use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial delay before the template backend answers.
    pub proposal_latency_ms: u64,
    /// Artificial delay for the simulated checkout.
    pub checkout_delay_ms: u64,
    /// Sessions untouched for this long are dropped.
    pub session_ttl_secs: u64,
    /// How often the expiry sweep runs.
    pub session_sweep_secs: u64,
    /// Browser origins allowed by CORS. Empty allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            proposal_latency_ms: 2000,
            checkout_delay_ms: 2000,
            session_ttl_secs: 3600,
            session_sweep_secs: 60,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            proposal_latency_ms: env_or("PROPOSAL_LATENCY_MS", defaults.proposal_latency_ms)?,
            checkout_delay_ms: env_or("CHECKOUT_DELAY_MS", defaults.checkout_delay_ms)?,
            session_ttl_secs: env_or("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            session_sweep_secs: env_or("SESSION_SWEEP_SECS", defaults.session_sweep_secs)?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or(defaults.cors_allowed_origins),
        })
    }

    pub fn proposal_latency(&self) -> Duration {
        Duration::from_millis(self.proposal_latency_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Never zero; `tokio::time::interval` panics on a zero period.
    pub fn session_sweep_period(&self) -> Duration {
        Duration::from_secs(self.session_sweep_secs.max(1))
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

/// Comma-separated list, blanks dropped.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
