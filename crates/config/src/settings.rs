//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{env, limits, session};
use crate::{ConfigError, ReplyTemplates};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation
    #[default]
    Development,
    /// Staging mode
    Staging,
    /// Production mode
    Production,
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Chat session behaviour
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Inline reply template overrides
    #[serde(default)]
    pub templates: ReplyTemplates,

    /// Optional YAML template pack, loaded over `templates`
    #[serde(default)]
    pub templates_path: Option<String>,
}

/// Chat session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Simulated typing delay before each assistant reply (ms)
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Brand the assistant speaks for
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
}

fn default_typing_delay_ms() -> u64 {
    session::DEFAULT_TYPING_DELAY_MS
}

fn default_brand_name() -> String {
    session::DEFAULT_BRAND_NAME.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            brand_name: default_brand_name(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_session()?;
        self.validate_observability()?;
        self.templates.validate()?;
        Ok(())
    }

    fn validate_session(&self) -> Result<(), ConfigError> {
        if self.session.typing_delay_ms > limits::MAX_TYPING_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "session.typing_delay_ms".to_string(),
                message: format!(
                    "Typing delay too high (maximum {}ms), got {}",
                    limits::MAX_TYPING_DELAY_MS,
                    self.session.typing_delay_ms
                ),
            });
        }

        if self.session.brand_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.brand_name".to_string(),
                message: "Brand name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown log level '{}', expected one of {:?}",
                    self.observability.log_level, LOG_LEVELS
                ),
            });
        }
        Ok(())
    }

    /// Apply `templates_path`, if set, over the inline templates
    fn resolve_templates(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = &self.templates_path {
            self.templates = ReplyTemplates::load(path)?;
            tracing::debug!(path = %path, "Loaded reply template pack");
        }
        Ok(self)
    }
}

/// Load settings from `config/` in the working directory.
///
/// Priority (highest to lowest):
/// 1. Environment variables (LEAD_AGENT__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env_name: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env_name)
}

/// Load settings from an explicit config directory
pub fn load_settings_from<P: AsRef<Path>>(
    dir: P,
    env_name: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    builder = builder.add_source(File::from(dir.join("default")).required(false));

    if let Some(env_name) = env_name {
        builder = builder.add_source(File::from(dir.join(env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;
    let settings = settings.resolve_templates()?;

    settings.validate()?;

    Ok(settings)
}
