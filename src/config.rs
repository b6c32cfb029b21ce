//! Configuration file support for tevcat.
//!
//! Provides YAML-based configuration through `tevcat.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "tevcat.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Page URL to fetch instead of the public TeVCat page.
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    /// Catalog names enabled for list, nearest and map.
    pub catalogs: Option<Vec<String>>,
    pub search_radius_deg: Option<f64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set. Validation has already rejected bad values.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
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

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: url must start with http:// or https:// (got '{}').\n\n\
                 💡 Hint: Use --page to read a saved copy of the page from disk.",
                url
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: The default timeout is 30 seconds."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref catalogs) = config.catalogs {
        for (i, name) in catalogs.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: catalogs[{}] must not be empty.\n\n\
                     💡 Hint: Use catalog names such as \"Default Catalog\" or \"Newly Announced\".",
                    i
                );
            }
        }
    }

    if let Some(radius) = config.search_radius_deg {
        if !(radius > 0.0 && radius <= 180.0) {
            bail!(
                "Invalid config: search_radius_deg must be within (0, 180] (got {}).",
                radius
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
