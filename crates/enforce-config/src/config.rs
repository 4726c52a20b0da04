// crates/enforce-config/src/config.rs
// ============================================================================
// Module: Enforce Configuration
// Description: Configuration loading and validation for enforcement policy.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: enforce-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys, oversized inputs, and invalid values fail closed rather than
//! falling back to defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use enforce_core::EnforcePolicy;
use enforce_core::Enforcer;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "enforce.toml";
/// Environment variable naming the configuration path.
pub const CONFIG_ENV_VAR: &str = "ENFORCE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the configured placeholder message.
pub const MAX_DEFAULT_MESSAGE_LENGTH: usize = 1024;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Enforcement configuration loaded from `enforce.toml`.
///
/// # Invariants
/// - A loaded config has passed [`EnforceConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnforceConfig {
    /// Enforcement policy section.
    #[serde(default)]
    pub policy: EnforcePolicy,
}

impl EnforceConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The explicit `path` wins, then the `ENFORCE_CONFIG` environment
    /// variable, then `enforce.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_policy(&self.policy)
    }

    /// Returns the configured enforcement policy.
    #[must_use]
    pub const fn policy(&self) -> &EnforcePolicy {
        &self.policy
    }

    /// Builds an enforcer bound to the configured policy.
    #[must_use]
    pub fn enforcer(&self) -> Enforcer {
        Enforcer::new(self.policy.clone())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates the policy section.
fn validate_policy(policy: &EnforcePolicy) -> Result<(), ConfigError> {
    if policy.default_message.trim().is_empty() {
        return Err(ConfigError::Invalid("policy.default_message must be non-empty".to_string()));
    }
    if policy.default_message.len() > MAX_DEFAULT_MESSAGE_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "policy.default_message exceeds {MAX_DEFAULT_MESSAGE_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
