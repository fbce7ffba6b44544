//! Bridge configuration (`dvm-proxy.toml`)
//!
//! ```toml
//! constructor_name = "<init>"
//! jni_true = 1
//!
//! [[alias]]
//! class = "com.example.Token"
//! alias = "createString"
//! target = "asString"
//! ```
//!
//! Every field is optional. Alias rules are appended after the built-in
//! ones.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use dvm_proxy_sdk::{CONSTRUCTOR_NAME, JNI_TRUE};

use crate::alias::{AliasRule, AliasTable};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    ValidationError(String),
}

/// Bridge settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeConfig {
    /// Name that marks a call descriptor as a constructor
    #[serde(default = "default_constructor_name")]
    pub constructor_name: String,

    /// 32-bit value decoded as boolean `true`
    #[serde(default = "default_jni_true")]
    pub jni_true: i32,

    /// Extra alias rules, consulted after the built-in ones
    #[serde(default, rename = "alias", skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasRule>,
}

fn default_constructor_name() -> String {
    CONSTRUCTOR_NAME.to_string()
}

fn default_jni_true() -> i32 {
    JNI_TRUE
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            constructor_name: default_constructor_name(),
            jni_true: default_jni_true(),
            aliases: Vec::new(),
        }
    }
}

impl BridgeConfig {
    /// Parse a config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a config from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.constructor_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "constructor_name cannot be empty".to_string(),
            ));
        }

        for rule in &self.aliases {
            if rule.class.is_empty() || rule.alias.is_empty() || rule.target.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "alias rule has an empty field: {:?}",
                    rule
                )));
            }
            if rule.alias == rule.target {
                return Err(ConfigError::ValidationError(format!(
                    "alias '{}' on {} maps to itself",
                    rule.alias, rule.class
                )));
            }
            if rule.alias == self.constructor_name {
                return Err(ConfigError::ValidationError(format!(
                    "constructors cannot be aliased ({})",
                    rule.class
                )));
            }
        }

        Ok(())
    }

    /// Built-in rules followed by the configured ones
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::builtin();
        table.extend(self.aliases.iter().cloned());
        table
    }
}
