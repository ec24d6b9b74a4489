use std::env;
use std::time::Duration;

use thiserror::Error;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const FRONTEND_URL: &str = "http://localhost:5173";
const GEMINI_MODEL: &str = "gemini-1.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub environment: String,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Reads the process environment. A missing `GEMINI_API_KEY` is an error here
    /// and fatal for the server.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => {
                let parsed = raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
                match parsed {
                    Some(secs) => secs,
                    None => {
                        return Err(ConfigError::Invalid {
                            key: "GEMINI_TIMEOUT_SECS",
                            value: raw,
                        })
                    }
                }
            }
            Err(_) => GEMINI_TIMEOUT_SECS,
        };

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port,
            frontend_url: env::var("FRONTEND_URL").unwrap_or_else(|_| FRONTEND_URL.to_string()),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
            gemini: GeminiConfig {
                api_key,
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| GEMINI_MODEL.to_string()),
                base_url: env::var("GEMINI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|_| GEMINI_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
