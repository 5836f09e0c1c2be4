//! Configuration file support for pipenv-deps.
//!
//! Provides YAML-based configuration through `pipenv-deps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::DepsError;
use crate::shared::fs_guard;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pipenv-deps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Output format: `json` or `markdown`
    pub format: Option<String>,
    /// Pipenv executable used to produce the tree report
    pub pipenv: Option<String>,
    /// Output file path
    pub output: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any. Validated at load time.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs_guard::read_guarded(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        if let Err(details) = OutputFormat::from_str(format) {
            return Err(DepsError::ConfigError {
                path: path.to_path_buf(),
                details,
                hint: "Set 'format' to 'json' or 'markdown'.".to_string(),
            }
            .into());
        }
    }

    if let Some(pipenv) = config.pipenv.as_deref() {
        if pipenv.trim().is_empty() {
            return Err(DepsError::ConfigError {
                path: path.to_path_buf(),
                details: "'pipenv' must not be empty".to_string(),
                hint: "Remove the field to use `pipenv` from PATH, or set an executable path."
                    .to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
