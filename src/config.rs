// src/config.rs
//
// Runtime configuration. Both services default to their local development
// origins and can be pointed elsewhere through the environment.

use tracing::info;

pub const GENERATOR_URL_ENV: &str = "TALENTHUB_GENERATOR_URL";
pub const SCREENER_URL_ENV: &str = "TALENTHUB_SCREENER_URL";

const DEFAULT_GENERATOR_URL: &str = "http://localhost:5000";
const DEFAULT_SCREENER_URL: &str = "http://localhost:5001";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the job-description generation service.
    pub generator_url: String,

    /// Origin of the resume screening service.
    pub screener_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self {
            generator_url: env_or(GENERATOR_URL_ENV, DEFAULT_GENERATOR_URL),
            screener_url: env_or(SCREENER_URL_ENV, DEFAULT_SCREENER_URL),
        };
        info!(
            generator_url = %config.generator_url,
            screener_url = %config.screener_url,
            "configuration loaded"
        );
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator_url: DEFAULT_GENERATOR_URL.to_string(),
            screener_url: DEFAULT_SCREENER_URL.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_services() {
        let config = Config::default();
        assert_eq!(config.generator_url, "http://localhost:5000");
        assert_eq!(config.screener_url, "http://localhost:5001");
    }
}
