use serde::{Deserialize, Serialize};

use crate::{ConfigError, Fixtures, VerificationTiming};

/// The `config.toml` shipped with the app, compiled in so that the web build
/// needs no file access.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub verification: VerificationTiming,
    #[serde(default)]
    pub fixtures: Fixtures,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the compiled-in `config.toml`.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Layer `overrides` over the compiled-in `config.toml`, then validate.
    ///
    /// Sections the override leaves out keep their embedded values, so a file
    /// that only tunes `[verification]` still gets the embedded fixtures.
    pub fn embedded_with_overrides(overrides: &str) -> Result<Self, ConfigError> {
        Self::layered(EMBEDDED_CONFIG, overrides)
    }

    /// Parse `base`, merge `overrides` over it and validate the result.
    pub fn layered(base: &str, overrides: &str) -> Result<Self, ConfigError> {
        let mut merged: toml::Table = toml::from_str(base)?;
        merge_tables(&mut merged, toml::from_str(overrides)?);
        let config: AppConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.verification.validate()?;
        self.fixtures.validate()
    }
}

/// Tables merge key by key; any other value, arrays included, replaces the
/// base value outright.
fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
