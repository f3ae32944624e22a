use std::env;

use anyhow::{Context, Result};

/// Placeholder image attached to newly created events.
pub const DEFAULT_EVENT_IMAGE_URL: &str = "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Events
    pub event_image_url: String,

    // Logging
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 3000,
            event_image_url: DEFAULT_EVENT_IMAGE_URL.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let web_port = match lookup("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("WEB_PORT must be a port number, got {raw:?}"))?,
            None => defaults.web_port,
        };

        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or(defaults.web_host),
            web_port,
            event_image_url: lookup("EVENT_IMAGE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.event_image_url),
            log_json: lookup("LOG_FORMAT")
                .map(|f| f.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}
