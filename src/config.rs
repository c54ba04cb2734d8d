//! Engine configuration helpers.
//!
//! The config only steers the CLI (which audit findings fail a run); the
//! engine itself has no tunables.
use crate::audit::FindingKind;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

const CONFIG_DIR_NAME: &str = "reqflow";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub schema_version: u32,
    /// Audit finding kinds that make `reqflow audit` exit non-zero.
    #[serde(default)]
    pub fail_on: Vec<FindingKind>,
}

/// Build the config used when no file is present.
pub fn default_config() -> EngineConfig {
    EngineConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        fail_on: Vec::new(),
    }
}

/// Per-user config location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    validate_config(&config).with_context(|| format!("validate config {}", path.display()))?;
    Ok(config)
}

/// Load a config if the file exists; a missing file yields `None`.
pub fn load_config_optional(path: &Path) -> Result<Option<EngineConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    load_config(path).map(Some)
}

/// Resolve the effective config.
///
/// An explicit path must exist. Otherwise the per-user file is used when
/// present, and built-in defaults when it is not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let Some(path) = default_config_path() else {
        return Ok(default_config());
    };
    let config = load_config_optional(&path)?;
    if config.is_some() {
        tracing::debug!(path = %path.display(), "loaded user config");
    }
    Ok(config.unwrap_or_else(default_config))
}

/// Persist a config in a stable JSON format, creating parent directories.
pub fn write_config(path: &Path, config: &EngineConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }
    let mut text = serde_json::to_string_pretty(config).context("serialize config")?;
    text.push('\n');
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Validate schema version and `fail_on` entries.
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {} (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }
    let mut seen = Vec::with_capacity(config.fail_on.len());
    for kind in &config.fail_on {
        if seen.contains(kind) {
            return Err(anyhow!("fail_on lists {kind} more than once"));
        }
        seen.push(*kind);
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
