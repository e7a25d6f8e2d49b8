//! Lint run configuration.
//!
//! A [`LintConfig`] lists which sub-rules to run, in order, plus their
//! per-rule options. Hosts usually hand one over directly; [`LintConfig::load`]
//! reads a `flowlint.toml` or `.json` file, and [`LintConfig::from_value`]
//! ingests arbitrary JSON leniently: malformed entries degrade to no-ops
//! rather than failing the run.
//!
//! # Configuration Format
//!
//! ```toml
//! # flowlint.toml
//!
//! [[subrules]]
//! name = "flowsize"
//! maxSize = 120
//!
//! [[subrules]]
//! name = "loop"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// One configured sub-rule entry.
///
/// Unknown serialized fields are ignored so configs written for newer
/// rule sets still load here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubruleConfig {
    pub name: String,
    /// Flow-size limit; [`DEFAULT_MAX_FLOW_SIZE`](crate::rules::DEFAULT_MAX_FLOW_SIZE)
    /// when unset.
    #[serde(default, rename = "maxSize", skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
}

impl SubruleConfig {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            max_size: None,
        }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

/// Configuration for one lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Sub-rules to run, in order. `None` runs nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrules: Option<Vec<SubruleConfig>>,
}

impl LintConfig {
    /// Config running the given rule names with default options.
    pub fn with_subrules<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            subrules: Some(names.into_iter().map(SubruleConfig::named).collect()),
        }
    }

    /// Load from a `.toml` or `.json` file, picked by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Ingest an arbitrary JSON value, dropping whatever does not fit.
    ///
    /// A missing or non-array `subrules` becomes `None`; entries without a
    /// string `name` are skipped; a `maxSize` that is not an unsigned
    /// integer is ignored.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(entries) = value.get("subrules").and_then(|v| v.as_array()) else {
            return Self::default();
        };

        let subrules = entries
            .iter()
            .filter_map(|entry| {
                let Some(name) = entry.get("name").and_then(|v| v.as_str()) else {
                    debug!("dropping sub-rule entry without a name");
                    return None;
                };
                let max_size = entry
                    .get("maxSize")
                    .and_then(|v| v.as_u64())
                    .map(|v| v as usize);
                Some(SubruleConfig {
                    name: name.to_string(),
                    max_size,
                })
            })
            .collect();

        Self {
            subrules: Some(subrules),
        }
    }
}
