use pos_client::ClientConfig;

use crate::{BackofficeError, BackofficeResult};

/// Back-office configuration
///
/// # Environment variables
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | POS_API_URL | http://localhost:8080 | backend base URL |
/// | POS_API_TOKEN | - | bearer token |
/// | POS_REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | POS_LOG_LEVEL | info | log filter |
/// | POS_LOG_JSON | false | JSON log lines |
/// | POS_LOG_DIR | - | daily rolling log files |
/// | POS_ENVIRONMENT | development | development / staging / production |
///
/// A `.env` file in the working directory is loaded by the binary first.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key → value source; unset or
    /// unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_empty("POS_API_URL").unwrap_or_else(|| "http://localhost:8080".into()),
            api_token: non_empty("POS_API_TOKEN"),
            request_timeout_secs: non_empty("POS_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(30),
            log_level: non_empty("POS_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("POS_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            log_dir: non_empty("POS_LOG_DIR"),
            environment: non_empty("POS_ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn validate(&self) -> BackofficeResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(BackofficeError::Config(format!(
                "POS_API_URL must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(BackofficeError::Config(
                "POS_REQUEST_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Client configuration for the backend API
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url).with_timeout(self.request_timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
