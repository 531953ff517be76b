use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::models::PageConfig;
use crate::validation::{ConfigGuardRailError, ConfigWarnings};

/// Source that produced the page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults, nothing was supplied.
    #[default]
    Default,
    /// A document embedded in the page.
    Inline,
    /// A file on disk.
    File(PathBuf),
}

/// Why a configuration document was rejected.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error(
        "failed to parse page config {origin}: toml error: {toml}; json error: {json}"
    )]
    Parse {
        origin: String,
        toml: toml::de::Error,
        json: serde_json::Error,
    },

    #[error("invalid page config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid page config toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}

impl PageConfig {
    /// Resolve the configuration for a page.
    ///
    /// `inline` is the raw document embedded in the page, if any. Blank
    /// documents are treated as absent. The result is validated and the
    /// non-fatal warnings are returned for the caller to log once its
    /// subscriber is up.
    pub fn resolve(
        inline: Option<&str>,
    ) -> Result<(Self, ConfigSource, ConfigWarnings), ConfigError> {
        let (config, source) = match inline {
            Some(raw) if !raw.trim().is_empty() => {
                (Self::parse_from_str(raw, "inline")?, ConfigSource::Inline)
            }
            _ => (Self::default(), ConfigSource::Default),
        };

        let warnings = config.validate()?;
        tracing::debug!(
            ?source,
            warnings = warnings.len(),
            "page config resolved"
        );
        Ok((config, source, warnings))
    }

    /// Read and validate a file, picking the format from its extension.
    /// Unknown extensions try TOML, then JSON.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read page config from {}", path.display())
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(ConfigError::from)
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
        .with_context(|| format!("invalid page config {}", path.display()))?;

        config.validate().with_context(|| {
            format!("page config {} failed validation", path.display())
        })?;
        Ok(config)
    }

    /// Parse `contents` as TOML, falling back to JSON. `origin` names the
    /// document in errors.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigError::Parse {
                    origin: origin.to_string(),
                    toml: toml_err,
                    json: json_err,
                }
            })
        })
    }

    /// Parse a JSON document.
    pub fn parse_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
