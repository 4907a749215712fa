//! Configuration handling for the contact form
//!
//! Operator settings come from `config.json` in the platform config directory,
//! overridden by `EMAILJS_*` environment variables. The provider ids are
//! validated once at startup into a [`ProviderConfig`].

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default `to_name` template parameter
pub const DEFAULT_RECIPIENT_NAME: &str = "EmotiTrack Team";

/// Values shipped in config templates that must be replaced before use
const PLACEHOLDERS: &[&str] = &[
    "YOUR_PUBLIC_KEY_HERE",
    "YOUR_SERVICE_ID_HERE",
    "YOUR_TEMPLATE_ID_HERE",
    "TU_PUBLIC_KEY_AQUI",
    "TU_SERVICE_ID_AQUI",
    "TU_TEMPLATE_ID_AQUI",
];

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// EmailJS public key (sent as `user_id`)
    pub public_key: Option<String>,
    /// EmailJS service id
    pub service_id: Option<String>,
    /// EmailJS template id
    pub template_id: Option<String>,
    /// Name passed to the template as `to_name`
    pub recipient_name: Option<String>,
    /// Send endpoint override
    pub endpoint: Option<String>,
}

/// Why the provider configuration is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} still holds a placeholder value")]
    Placeholder(&'static str),
    #[error("config file could not be read: {0}")]
    Unreadable(String),
}

/// Validated provider credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub recipient_name: String,
}

impl ProviderConfig {
    /// Validate raw values, rejecting blanks and template placeholders
    pub fn new(
        public_key: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        recipient_name: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            public_key: require("public_key", public_key)?,
            service_id: require("service_id", service_id)?,
            template_id: require("template_id", template_id)?,
            recipient_name: recipient_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_RECIPIENT_NAME)
                .to_string(),
        })
    }
}

fn require(field: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ConfigError::Missing(field));
    }
    if is_placeholder(value) {
        return Err(ConfigError::Placeholder(field));
    }
    Ok(value.to_string())
}

/// Check whether a value is one of the template sentinels
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDERS.contains(&value.trim())
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Config with placeholder ids for the operator to fill in
    pub fn template() -> Self {
        Self {
            public_key: Some("YOUR_PUBLIC_KEY_HERE".to_string()),
            service_id: Some("YOUR_SERVICE_ID_HERE".to_string()),
            template_id: Some("YOUR_TEMPLATE_ID_HERE".to_string()),
            recipient_name: Some(DEFAULT_RECIPIENT_NAME.to_string()),
            endpoint: None,
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration for startup, writing a template file first if none
    /// exists, then apply environment overrides.
    ///
    /// Startup never fails here. A template that cannot be written is only
    /// logged. A file that cannot be read or parsed is replaced by defaults
    /// and reported as the returned [`ConfigError`].
    pub fn load_or_init() -> (Self, Option<ConfigError>) {
        let lookup = |key: &str| std::env::var(key).ok();
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path, lookup),
            None => {
                tracing::warn!("No config directory available, using environment only");
                let mut config = Self::default();
                config.apply_overrides(lookup);
                (config, None)
            }
        }
    }

    fn load_or_init_at<F>(path: &Path, lookup: F) -> (Self, Option<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        if !path.exists() {
            match Self::template().save_to(path) {
                Ok(()) => tracing::info!("Wrote config template to {}", path.display()),
                Err(err) => {
                    tracing::warn!("Could not write config template to {}: {err:#}", path.display())
                }
            }
        }

        let (mut config, file_error) = match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!("Could not read config from {}: {err:#}", path.display());
                (Self::default(), Some(ConfigError::Unreadable(err.to_string())))
            }
        };
        config.apply_overrides(lookup);
        (config, file_error)
    }

    /// Apply `EMAILJS_*` overrides from the given variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            ("EMAILJS_PUBLIC_KEY", &mut self.public_key),
            ("EMAILJS_SERVICE_ID", &mut self.service_id),
            ("EMAILJS_TEMPLATE_ID", &mut self.template_id),
            ("EMAILJS_ENDPOINT", &mut self.endpoint),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = Some(value);
            }
        }
    }

    /// Validate the provider ids
    pub fn provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        ProviderConfig::new(
            self.public_key.as_deref(),
            self.service_id.as_deref(),
            self.template_id.as_deref(),
            self.recipient_name.as_deref(),
        )
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}
