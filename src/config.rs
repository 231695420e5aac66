//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared
//! read-only for the lifetime of the process.
//!
//! ```bash
//! export BACKENDLESS_BASE_URL="https://myapp.backendless.app/api/data/UsersDB"
//! export BACKENDLESS_APP_ID="XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX"   # optional
//! export BACKENDLESS_API_KEY="YYYYYYYY-YYYY-YYYY-YYYY-YYYYYYYYYYYY"  # optional
//! export PORT=8000
//! ```
//!
//! ## Optional Variables
//!
//! - `BACKENDLESS_BASE_URL` - Users table endpoint (default: [`DEFAULT_BASE_URL`])
//! - `BACKENDLESS_APP_ID` / `BACKENDLESS_API_KEY` - Credentials, sent only when both are set
//! - `PORT` - Listening port on all interfaces (default: `8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Users table endpoint used when `BACKENDLESS_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://neatpartner-us.backendless.app/api/data/UsersDB";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Static credentials attached to every Backendless request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub application_id: String,
    pub api_key: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    /// Present only when both `BACKENDLESS_APP_ID` and `BACKENDLESS_API_KEY` are non-empty.
    pub credentials: Option<Credentials>,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKENDLESS_BASE_URL` or `PORT` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let raw_base_url =
            env::var("BACKENDLESS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base_url)
            .with_context(|| format!("BACKENDLESS_BASE_URL is not a valid URL: '{raw_base_url}'"))?;

        let credentials = Self::load_credentials();

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{v}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            credentials,
            port,
            log_level,
            log_format,
        })
    }

    /// Loads credentials; both values must be set and non-empty.
    fn load_credentials() -> Option<Credentials> {
        let application_id = env::var("BACKENDLESS_APP_ID").ok().filter(|v| !v.is_empty());
        let api_key = env::var("BACKENDLESS_API_KEY").ok().filter(|v| !v.is_empty());

        match (application_id, api_key) {
            (Some(application_id), Some(api_key)) => Some(Credentials {
                application_id,
                api_key,
            }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "Only one of BACKENDLESS_APP_ID / BACKENDLESS_API_KEY is set; sending no credentials"
                );
                None
            }
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an `http`/`https` URL with a host
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.base_url.scheme() != "http" && self.base_url.scheme() != "https" {
            anyhow::bail!(
                "BACKENDLESS_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.base_url.host_str().is_none() {
            anyhow::bail!("BACKENDLESS_BASE_URL must include a host, got '{}'", self.base_url);
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Bind address on all interfaces.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Backendless endpoint: {}", self.base_url);

        if let Some(ref credentials) = self.credentials {
            tracing::info!(
                "  Credentials: app id {}, api key {}",
                mask_secret(&credentials.application_id),
                mask_secret(&credentials.api_key)
            );
        } else {
            tracing::info!("  Credentials: none");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its last four characters.
///
/// - `BBBB-CCCC-DDDD` → `***DDDD`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
