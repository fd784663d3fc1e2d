//! Configuration management for the lead agent
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (LEAD_AGENT__ prefix)
//! - A standalone YAML reply-template pack (`templates_path`)

pub mod constants;
pub mod prompts;
pub mod settings;

pub use prompts::{render, FieldTemplates, ReplyTemplates};
pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, RuntimeEnvironment, SessionConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
